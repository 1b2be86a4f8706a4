//! Column lookup by header text
//!
//! Row 0 of a sheet holds the column headers. Lookups scan it left to right
//! up to the row's extent plus a configurable overscan margin; cells that
//! cannot be read as text are skipped rather than aborting the scan.

use log::debug;
use sheetcraft_core::Worksheet;

use crate::error::{Error, Result};
use crate::options::ResolverOptions;

/// Row holding the column headers
pub const HEADER_ROW: u32 = 0;

/// Find the column whose header equals `name`, with default options
///
/// ```rust
/// use sheetcraft::{resolve_column, Worksheet};
///
/// let mut sheet = Worksheet::new("Orders");
/// sheet.set_cell_value_at(0, 0, "Name").unwrap();
/// sheet.set_cell_value_at(0, 1, "Qty").unwrap();
///
/// assert_eq!(resolve_column(&sheet, "Qty").unwrap(), 1);
/// assert!(resolve_column(&sheet, "qty").is_err());
/// ```
pub fn resolve_column(sheet: &Worksheet, name: &str) -> Result<u16> {
    resolve_column_with(sheet, name, &ResolverOptions::default())
}

/// Find the column whose header equals `name`
///
/// Matching is exact (case-sensitive, no trimming) and the leftmost match
/// wins. On failure the error lists every text header found in the scan.
pub fn resolve_column_with(sheet: &Worksheet, name: &str, options: &ResolverOptions) -> Result<u16> {
    let header = sheet.row(HEADER_ROW);
    let found = scan_range(sheet, options)
        .find(|&col| matches!(header.cell(col).read_text(), Ok(text) if text == name));

    match found {
        Some(col) => Ok(col),
        None => {
            let headers = header_texts(sheet, options);
            debug!(
                "column {:?} not in sheet {:?} (headers: {:?})",
                name,
                sheet.name(),
                headers
            );
            Err(Error::ColumnNotFound {
                column: name.to_string(),
                sheet: sheet.name().to_string(),
                headers,
            })
        }
    }
}

/// Text of every header cell in the scan range, in column order
///
/// Blank and numeric header cells are left out.
pub fn header_texts(sheet: &Worksheet, options: &ResolverOptions) -> Vec<String> {
    let header = sheet.row(HEADER_ROW);
    scan_range(sheet, options)
        .filter_map(|col| header.cell(col).read_text().ok().map(str::to_owned))
        .collect()
}

fn scan_range(sheet: &Worksheet, options: &ResolverOptions) -> impl Iterator<Item = u16> {
    let end = sheet
        .row_extent(HEADER_ROW)
        .saturating_add(u32::from(options.header_overscan))
        .min(u32::from(sheetcraft_core::MAX_COLS));
    // end <= MAX_COLS, which fits in u16
    0..end as u16
}
