//! Row-oriented helpers on worksheets

use log::warn;
use sheetcraft_core::{
    Cell, CellValue, Error as CoreError, NumberFormat, Row, Worksheet, MAX_COLS, MAX_ROWS,
};

use crate::column::resolve_column;
use crate::error::Result;
use crate::options::RowScanOptions;
use crate::value::{set_number_format, write_value, CellInput};

/// Extension trait adding row and by-name access to [`Worksheet`]
///
/// `Worksheet::row` and `Worksheet::cell` already give blank-tolerant read
/// views; this trait builds on them.
///
/// ```rust
/// use sheetcraft::prelude::*;
///
/// let mut sheet = Worksheet::new("Orders");
/// sheet.set_header(["Name", "Qty"]).unwrap();
/// let row = sheet.add_row(vec![CellInput::from("Widget"), CellInput::from(5)]).unwrap();
///
/// assert_eq!(row, 1);
/// assert_eq!(sheet.cell_by_name(1, "Qty").unwrap().as_long().unwrap(), 5);
/// ```
pub trait SheetExt {
    /// The cell at `row` under the column headed `name`
    fn cell_by_name(&self, row: u32, name: &str) -> Result<Cell<'_>>;

    /// Write a value at (`row`, `col`)
    fn set_value(&mut self, row: u32, col: u16, value: impl Into<CellInput>) -> Result<()>;

    /// Write a value at `row` under the column headed `name`
    fn set_by_name(&mut self, row: u32, name: &str, value: impl Into<CellInput>) -> Result<()>;

    /// Write `values` into `row`, left to right from column 0
    ///
    /// Nothing is written when `row` or the number of values is out of bounds.
    fn set_row<I>(&mut self, row: u32, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<CellInput>;

    /// Write `values` into the row after the last one; returns its index
    ///
    /// An empty sheet gets row 0.
    fn add_row<I>(&mut self, values: I) -> Result<u32>
    where
        I: IntoIterator,
        I::Item: Into<CellInput>;

    /// Write the header row (row 0)
    fn set_header<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<CellInput>,
    {
        self.set_row(0, values)
    }

    /// The last row holding any materialized cell
    fn last_row(&self) -> Option<Row<'_>>;

    /// Rows `start..=end`; empty when `start > end`
    fn rows_between(&self, start: u32, end: u32) -> Vec<Row<'_>>;

    /// Rows from `starting_from` through the last non-blank row
    ///
    /// A row is blank when its first `probe_columns` cells are all blank or
    /// empty text. Sheets whose last row index is above `row_count_warning`
    /// are assumed to carry a bogus row count: a warning is logged and rows
    /// are taken from the top up to the first blank row instead.
    fn data_rows(&self, starting_from: u32, options: &RowScanOptions) -> Vec<Row<'_>>;
}

impl SheetExt for Worksheet {
    fn cell_by_name(&self, row: u32, name: &str) -> Result<Cell<'_>> {
        let col = resolve_column(self, name)?;
        Ok(self.cell(row, col))
    }

    fn set_value(&mut self, row: u32, col: u16, value: impl Into<CellInput>) -> Result<()> {
        write_value(self, row, col, value)
    }

    fn set_by_name(&mut self, row: u32, name: &str, value: impl Into<CellInput>) -> Result<()> {
        let col = resolve_column(self, name)?;
        write_value(self, row, col, value)
    }

    fn set_row<I>(&mut self, row: u32, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<CellInput>,
    {
        let values: Vec<CellInput> = values.into_iter().map(Into::into).collect();
        if row >= MAX_ROWS {
            return Err(CoreError::RowOutOfBounds(row, MAX_ROWS - 1).into());
        }
        if values.len() > usize::from(MAX_COLS) {
            let last = u32::try_from(values.len() - 1).unwrap_or(u32::MAX);
            return Err(CoreError::ColumnOutOfBounds(last, MAX_COLS - 1).into());
        }
        for (col, value) in (0..).zip(values) {
            write_value(self, row, col, value)?;
        }
        Ok(())
    }

    fn add_row<I>(&mut self, values: I) -> Result<u32>
    where
        I: IntoIterator,
        I::Item: Into<CellInput>,
    {
        let row = match self.last_row_index() {
            Some(last) => last.saturating_add(1),
            None => 0,
        };
        self.set_row(row, values)?;
        Ok(row)
    }

    fn last_row(&self) -> Option<Row<'_>> {
        self.last_row_index().map(|index| self.row(index))
    }

    fn rows_between(&self, start: u32, end: u32) -> Vec<Row<'_>> {
        if start > end {
            return Vec::new();
        }
        (start..=end).map(|index| self.row(index)).collect()
    }

    fn data_rows(&self, starting_from: u32, options: &RowScanOptions) -> Vec<Row<'_>> {
        let Some(last) = self.last_row_index() else {
            return Vec::new();
        };

        let end = if last > options.row_count_warning {
            warn!(
                "sheet {:?} reports last row {}, above {}; scanning up to the first blank row",
                self.name(),
                last,
                options.row_count_warning
            );
            (0..options.fallback_scan_limit)
                .take_while(|&index| !is_blank_row(self.row(index), options.probe_columns))
                .last()
        } else {
            (starting_from..=last)
                .rev()
                .find(|&index| !is_blank_row(self.row(index), options.probe_columns))
        };

        match end {
            Some(end) => self.rows_between(starting_from, end),
            None => Vec::new(),
        }
    }
}

/// Whether the first `probe_columns` cells of `row` are blank or empty text
pub fn is_blank_row(row: Row<'_>, probe_columns: u16) -> bool {
    (0..probe_columns).all(|col| row.cell(col).value().is_blank_or_empty())
}

/// Overwrite `dest_row` of `dest` with `source_row` of `source`
///
/// Every column up to the wider of the two rows gets the source value
/// (blank stays blank) and its number format, and takes the source
/// column's width.
pub fn replace_row(
    dest: &mut Worksheet,
    dest_row: u32,
    source: &Worksheet,
    source_row: u32,
) -> Result<()> {
    let extent = source
        .row_extent(source_row)
        .max(dest.row_extent(dest_row));
    let snapshot = RowSnapshot::take(source, source_row, extent);
    snapshot.apply(dest, dest_row)
}

/// Copy `from` over `to` within one sheet, as [`replace_row`] does
pub fn copy_row(sheet: &mut Worksheet, from: u32, to: u32) -> Result<()> {
    let extent = sheet.row_extent(from).max(sheet.row_extent(to));
    let snapshot = RowSnapshot::take(sheet, from, extent);
    snapshot.apply(sheet, to)
}

/// Owned copy of what [`replace_row`] transfers for one row
struct RowSnapshot {
    cells: Vec<(u16, CellValue, NumberFormat, f64)>,
}

impl RowSnapshot {
    fn take(sheet: &Worksheet, row: u32, extent: u32) -> Self {
        let end = extent.min(u32::from(MAX_COLS));
        let cells = (0..end)
            .filter_map(|col| u16::try_from(col).ok())
            .map(|col| {
                (
                    col,
                    sheet.cell(row, col).value().clone(),
                    sheet.cell_style_at(row, col).number_format.clone(),
                    sheet.column_width(col),
                )
            })
            .collect();
        Self { cells }
    }

    fn apply(self, sheet: &mut Worksheet, row: u32) -> Result<()> {
        for (col, value, format, width) in self.cells {
            sheet.set_cell_value_at(row, col, value)?;
            set_number_format(sheet, row, col, format)?;
            sheet.set_column_width(col, width);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::CellExt;
    use crate::error::Error;
    use sheetcraft_core::CellKind;

    fn orders() -> Worksheet {
        let mut sheet = Worksheet::new("Orders");
        sheet.set_header(["Name", "Qty", "Price"]).unwrap();
        sheet
    }

    #[test]
    fn test_add_row_appends() {
        let mut sheet = Worksheet::new("Empty");
        assert_eq!(sheet.add_row(["first"]).unwrap(), 0);
        assert_eq!(sheet.add_row(["second"]).unwrap(), 1);

        sheet.set_cell_value_at(9, 0, "far").unwrap();
        assert_eq!(sheet.add_row(["next"]).unwrap(), 10);
    }

    #[test]
    fn test_set_by_name() {
        let mut sheet = orders();
        sheet.set_by_name(3, "Price", (12.5, 2)).unwrap();

        let cell = sheet.cell_by_name(3, "Price").unwrap();
        assert_eq!(cell.as_double().unwrap(), 12.5);
        assert_eq!(
            sheet.cell_style_at(3, 2).number_format.format_string(),
            "0.00"
        );

        assert!(matches!(
            sheet.set_by_name(3, "Total", 1),
            Err(Error::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_set_row_bounds() {
        let mut sheet = Worksheet::new("Wide");
        let values = vec![CellInput::from(1); usize::from(MAX_COLS) + 1];
        assert_eq!(
            sheet.set_row(0, values),
            Err(Error::Core(CoreError::ColumnOutOfBounds(
                u32::from(MAX_COLS),
                MAX_COLS - 1
            )))
        );
        assert!(sheet.is_empty());

        assert!(sheet.set_row(MAX_ROWS, ["a", "b"]).is_err());
        assert!(sheet.is_empty());

        let full = vec![CellInput::from("x"); usize::from(MAX_COLS)];
        sheet.set_row(0, full).unwrap();
        assert_eq!(sheet.row_extent(0), u32::from(MAX_COLS));
    }

    #[test]
    fn test_last_row_and_between() {
        let mut sheet = orders();
        assert_eq!(sheet.last_row().map(|r| r.index()), Some(0));

        sheet.add_row(["a"]).unwrap();
        sheet.add_row(["b"]).unwrap();
        assert_eq!(sheet.last_row().map(|r| r.index()), Some(2));

        let rows: Vec<u32> = sheet.rows_between(1, 2).iter().map(|r| r.index()).collect();
        assert_eq!(rows, vec![1, 2]);
        assert!(sheet.rows_between(3, 1).is_empty());
        assert!(Worksheet::new("x").last_row().is_none());
    }

    #[test]
    fn test_data_rows_skip_trailing_blanks() {
        let mut sheet = orders();
        sheet.add_row(["a"]).unwrap();
        sheet.add_row(["b"]).unwrap();
        // Materialized but blank trailing rows
        sheet.cell_mut(5, 0).unwrap();
        sheet.set_cell_value_at(6, 1, "").unwrap();

        let rows: Vec<u32> = sheet
            .data_rows(1, &RowScanOptions::default())
            .iter()
            .map(|r| r.index())
            .collect();
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_data_rows_probe_width() {
        let mut sheet = orders();
        sheet.set_cell_value_at(1, 12, "beyond the probe").unwrap();

        assert!(sheet.data_rows(1, &RowScanOptions::default()).is_empty());

        let wide = RowScanOptions {
            probe_columns: 13,
            ..RowScanOptions::default()
        };
        assert_eq!(sheet.data_rows(1, &wide).len(), 1);
    }

    #[test]
    fn test_data_rows_bogus_row_count() {
        let mut sheet = orders();
        sheet.add_row(["a"]).unwrap();
        sheet.add_row(["b"]).unwrap();
        sheet.add_row(["c"]).unwrap();
        sheet.cell_mut(50, 0).unwrap();
        sheet.set_cell_value_at(60, 0, "stray").unwrap();

        let options = RowScanOptions {
            row_count_warning: 40,
            ..RowScanOptions::default()
        };
        let rows: Vec<u32> = sheet
            .data_rows(1, &options)
            .iter()
            .map(|r| r.index())
            .collect();
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_data_rows_empty_sheet() {
        let sheet = Worksheet::new("Empty");
        assert!(sheet.data_rows(0, &RowScanOptions::default()).is_empty());
    }

    #[test]
    fn test_replace_row_across_sheets() {
        let mut source = Worksheet::new("Source");
        source.set_row(0, ["Widget"]).unwrap();
        source.set_value(0, 1, (5.0, 1)).unwrap();
        source.set_column_width(1, 20.0);

        let mut dest = Worksheet::new("Dest");
        dest.set_row(4, ["old", "old", "old"]).unwrap();

        replace_row(&mut dest, 4, &source, 0).unwrap();

        assert_eq!(dest.cell(4, 0).read_text().unwrap(), "Widget");
        assert_eq!(dest.cell(4, 1).read_number().unwrap(), 5.0);
        assert_eq!(dest.cell(4, 2).kind(), CellKind::Blank);
        assert_eq!(dest.cell_style_at(4, 1).number_format.format_string(), "0.0");
        assert_eq!(dest.column_width(1), 20.0);
    }

    #[test]
    fn test_copy_row_within_sheet() {
        let mut sheet = orders();
        sheet.set_row(1, ["Widget"]).unwrap();
        sheet.set_value(1, 1, 7).unwrap();

        copy_row(&mut sheet, 1, 2).unwrap();

        assert_eq!(sheet.cell(2, 0).read_text().unwrap(), "Widget");
        assert_eq!(sheet.cell(2, 1).as_long().unwrap(), 7);
    }
}
