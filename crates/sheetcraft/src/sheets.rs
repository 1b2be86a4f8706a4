//! Workbook-level sheet helpers

use sheetcraft_core::{Workbook, Worksheet};

use crate::error::Result;
use crate::rows::SheetExt;
use crate::value::CellInput;

/// Add a sheet named `name`, write `header` into row 0, then fill it with `f`
///
/// Returns whatever `f` returns. The sheet stays in the workbook even if `f`
/// fails.
///
/// ```rust
/// use sheetcraft::prelude::*;
/// use sheetcraft::sheets::create_sheet_with_header;
///
/// let mut workbook = Workbook::empty();
/// let rows = create_sheet_with_header(&mut workbook, "Orders", ["Name", "Qty"], |sheet| {
///     sheet.add_row(vec![CellInput::from("Widget"), CellInput::from(5)])?;
///     Ok(sheet.last_row_index())
/// })
/// .unwrap();
///
/// assert_eq!(rows, Some(1));
/// assert_eq!(resolve_column(workbook.worksheet(0).unwrap(), "Qty").unwrap(), 1);
/// ```
pub fn create_sheet_with_header<I, F, T>(
    workbook: &mut Workbook,
    name: &str,
    header: I,
    f: F,
) -> Result<T>
where
    I: IntoIterator,
    I::Item: Into<CellInput>,
    F: FnOnce(&mut Worksheet) -> Result<T>,
{
    let index = workbook.add_worksheet_with_name(name)?;
    let sheet = workbook
        .worksheet_mut(index)
        .ok_or(sheetcraft_core::Error::SheetOutOfBounds(index, index))?;
    sheet.set_header(header)?;
    f(sheet)
}

/// Rename the sheet called `old` to `new`
///
/// Fails with `SheetNotFound` when no sheet is called `old`, and like any
/// new sheet name when `new` is invalid or taken.
pub fn rename_sheet(workbook: &mut Workbook, old: &str, new: &str) -> Result<()> {
    let index = workbook
        .sheet_index(old)
        .ok_or_else(|| sheetcraft_core::Error::SheetNotFound(old.to_string()))?;
    workbook.rename_worksheet(index, new)?;
    Ok(())
}
