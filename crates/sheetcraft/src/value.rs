//! Writing typed values into cells
//!
//! [`CellInput`] covers what callers write: text, plain numbers, numbers
//! shown with a fixed number of decimals, and dates. Rounded values and dates
//! are stored as numbers; their number format decides how they display.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sheetcraft_core::{date_to_serial, CellValue, NumberFormat, Worksheet};

use crate::error::Result;

/// A value to write into a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellInput {
    /// Text, stored as-is
    Text(String),
    /// A number with the cell's current format
    Number(f64),
    /// A number displayed with `digits` decimal places
    Rounded { value: f64, digits: u8 },
    /// A date, stored as a serial number with a short date format
    Date(NaiveDateTime),
}

impl From<&str> for CellInput {
    fn from(s: &str) -> Self {
        CellInput::Text(s.to_string())
    }
}

impl From<String> for CellInput {
    fn from(s: String) -> Self {
        CellInput::Text(s)
    }
}

impl From<f64> for CellInput {
    fn from(n: f64) -> Self {
        CellInput::Number(n)
    }
}

impl From<i32> for CellInput {
    fn from(n: i32) -> Self {
        CellInput::Number(f64::from(n))
    }
}

impl From<i64> for CellInput {
    fn from(n: i64) -> Self {
        CellInput::Number(n as f64)
    }
}

impl From<(f64, u8)> for CellInput {
    fn from((value, digits): (f64, u8)) -> Self {
        CellInput::Rounded { value, digits }
    }
}

impl From<NaiveDateTime> for CellInput {
    fn from(dt: NaiveDateTime) -> Self {
        CellInput::Date(dt)
    }
}

impl From<NaiveDate> for CellInput {
    fn from(date: NaiveDate) -> Self {
        CellInput::Date(date.and_time(NaiveTime::MIN))
    }
}

/// Write `value` at (`row`, `col`), applying its number format if it has one
///
/// ```rust
/// use sheetcraft::value::write_value;
/// use sheetcraft::{CellValue, Worksheet};
///
/// let mut sheet = Worksheet::new("Prices");
/// write_value(&mut sheet, 0, 0, (3.14159, 2)).unwrap();
///
/// assert_eq!(sheet.get_value_at(0, 0), CellValue::Number(3.14159));
/// assert_eq!(sheet.cell_style_at(0, 0).number_format.format_string(), "0.00");
/// ```
pub fn write_value(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: impl Into<CellInput>,
) -> Result<()> {
    match value.into() {
        CellInput::Text(s) => sheet.set_cell_value_at(row, col, CellValue::text(s))?,
        CellInput::Number(n) => sheet.set_cell_value_at(row, col, n)?,
        CellInput::Rounded { value, digits } => {
            sheet.set_cell_value_at(row, col, value)?;
            set_rounding(sheet, row, col, digits)?;
        }
        CellInput::Date(dt) => {
            sheet.set_cell_value_at(row, col, date_to_serial(dt))?;
            set_number_format(sheet, row, col, NumberFormat::date_short())?;
        }
    }
    Ok(())
}

/// Display the cell's number with `digits` decimal places
pub fn set_rounding(sheet: &mut Worksheet, row: u32, col: u16, digits: u8) -> Result<()> {
    set_number_format(sheet, row, col, NumberFormat::fixed_decimals(digits))
}

/// Replace the number format of one cell, keeping the rest of its style
pub fn set_number_format(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    format: NumberFormat,
) -> Result<()> {
    let style = sheet.cell_style_at(row, col).clone().with_number_format(format);
    sheet.set_cell_style_at(row, col, &style)?;
    Ok(())
}
