//! Tolerant cell value coercion
//!
//! Spreadsheet authors mix typed and textual forms of the same value: a
//! quantity may be stored as the number `42` or as the text `"42"`. Each
//! function here reads a cell for one caller intent, with a fixed fallback
//! order:
//!
//! | Function | First | Then |
//! |---|---|---|
//! | [`as_display_string`] | text | number, truncated, as integer text |
//! | [`as_double`] | number | text, trimmed and parsed |
//! | [`as_long`] | [`as_double`] truncated toward zero | - |
//! | [`prefer_string_then_int`] | text | number, truncated |
//! | [`prefer_number_then_text`] | number | text |
//! | [`prefer_long_then_string`] | number, truncated, as text | text |
//! | [`is_numeric`] | stored kind is numeric | - |
//!
//! The order matters for ambiguous cells and must not change. Nothing is
//! ever defaulted: when the last fallback fails the caller gets
//! [`Error::CoercionFailed`] with the cell location and the target.
//!
//! ```rust
//! use sheetcraft::coerce::{as_display_string, as_double, as_long};
//! use sheetcraft::Worksheet;
//!
//! let mut sheet = Worksheet::new("Orders");
//! sheet.set_cell_value_at(1, 1, 5.0).unwrap();
//! sheet.set_cell_value_at(1, 2, " 12.50 ").unwrap();
//!
//! assert_eq!(as_long(&sheet.cell(1, 1)).unwrap(), 5);
//! assert_eq!(as_display_string(&sheet.cell(1, 1)).unwrap(), "5");
//! assert_eq!(as_double(&sheet.cell(1, 2)).unwrap(), 12.5);
//! ```

use std::fmt;

use sheetcraft_core::{Cell, CellAddress, CellKind};

use crate::error::{Error, Result};

/// Read access to one cell
///
/// The document model's cell view implements this; the coercions only need
/// these primitives.
pub trait ReadCell {
    /// Location of the cell, used in error messages
    fn address(&self) -> CellAddress;

    /// The kind of value stored
    fn kind(&self) -> CellKind;

    /// Read as text; fails with `WrongCellKind` unless the cell stores text
    fn read_text(&self) -> sheetcraft_core::Result<&str>;

    /// Read as a number; fails with `WrongCellKind` unless the cell stores a number
    fn read_number(&self) -> sheetcraft_core::Result<f64>;
}

impl ReadCell for Cell<'_> {
    fn address(&self) -> CellAddress {
        Cell::address(self)
    }

    fn kind(&self) -> CellKind {
        Cell::kind(self)
    }

    fn read_text(&self) -> sheetcraft_core::Result<&str> {
        Cell::read_text(self)
    }

    fn read_number(&self) -> sheetcraft_core::Result<f64> {
        Cell::read_number(self)
    }
}

/// The type a coercion was asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// [`as_display_string`]
    DisplayString,
    /// [`as_double`]
    Double,
    /// [`as_long`]
    Long,
    /// [`prefer_string_then_int`]
    TextOrInteger,
    /// [`prefer_number_then_text`]
    NumberOrText,
    /// [`prefer_long_then_string`]
    LongOrText,
}

impl Target {
    /// Name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::DisplayString => "display string",
            Target::Double => "double",
            Target::Long => "long",
            Target::TextOrInteger => "text or integer",
            Target::NumberOrText => "number or text",
            Target::LongOrText => "long or text",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`prefer_string_then_int`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOrInteger {
    /// The cell stored text
    Text(String),
    /// The cell stored a number, truncated toward zero
    Integer(i64),
}

impl fmt::Display for TextOrInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrInteger::Text(s) => f.write_str(s),
            TextOrInteger::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// Result of [`prefer_number_then_text`]
#[derive(Debug, Clone, PartialEq)]
pub enum NumberOrText {
    /// The cell stored a number
    Number(f64),
    /// The cell stored text
    Text(String),
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrText::Number(n) => write!(f, "{}", n),
            NumberOrText::Text(s) => f.write_str(s),
        }
    }
}

/// Text for display: text as stored, or a number truncated to integer text
///
/// Numbers lose their fractional part (`7.9` → `"7"`); blank cells fail.
pub fn as_display_string<C: ReadCell + ?Sized>(cell: &C) -> Result<String> {
    const TARGET: Target = Target::DisplayString;
    match cell.kind() {
        CellKind::Text => Ok(text(cell, TARGET)?.to_owned()),
        _ => integer(cell, TARGET).map(|n| n.to_string()),
    }
}

/// A number for arithmetic: the stored number, or text parsed as a decimal
///
/// Surrounding whitespace is trimmed before parsing.
pub fn as_double<C: ReadCell + ?Sized>(cell: &C) -> Result<f64> {
    double(cell, Target::Double)
}

/// [`as_double`] truncated toward zero (`9.9` → `9`, `-9.9` → `-9`)
pub fn as_long<C: ReadCell + ?Sized>(cell: &C) -> Result<i64> {
    let value = double(cell, Target::Long)?;
    truncate(value).ok_or_else(|| out_of_range(cell, Target::Long, value))
}

/// Text if the cell stores text, otherwise its number truncated to an integer
pub fn prefer_string_then_int<C: ReadCell + ?Sized>(cell: &C) -> Result<TextOrInteger> {
    const TARGET: Target = Target::TextOrInteger;
    match cell.kind() {
        CellKind::Text => Ok(TextOrInteger::Text(text(cell, TARGET)?.to_owned())),
        _ => integer(cell, TARGET).map(TextOrInteger::Integer),
    }
}

/// The number if the cell stores one, otherwise its text
pub fn prefer_number_then_text<C: ReadCell + ?Sized>(cell: &C) -> Result<NumberOrText> {
    const TARGET: Target = Target::NumberOrText;
    match cell.kind() {
        CellKind::Numeric => number(cell, TARGET).map(NumberOrText::Number),
        _ => Ok(NumberOrText::Text(text(cell, TARGET)?.to_owned())),
    }
}

/// A number truncated to integer text if the cell stores one, otherwise its text
pub fn prefer_long_then_string<C: ReadCell + ?Sized>(cell: &C) -> Result<String> {
    const TARGET: Target = Target::LongOrText;
    match cell.kind() {
        CellKind::Numeric => integer(cell, TARGET).map(|n| n.to_string()),
        _ => Ok(text(cell, TARGET)?.to_owned()),
    }
}

/// Whether the cell stores a number; never fails
pub fn is_numeric<C: ReadCell + ?Sized>(cell: &C) -> bool {
    cell.kind() == CellKind::Numeric
}

/// Method-call form of the coercions, for any [`ReadCell`]
pub trait CellExt: ReadCell {
    /// See [`as_display_string`]
    fn as_display_string(&self) -> Result<String> {
        as_display_string(self)
    }

    /// See [`as_double`]
    fn as_double(&self) -> Result<f64> {
        as_double(self)
    }

    /// See [`as_long`]
    fn as_long(&self) -> Result<i64> {
        as_long(self)
    }

    /// See [`prefer_string_then_int`]
    fn prefer_string_then_int(&self) -> Result<TextOrInteger> {
        prefer_string_then_int(self)
    }

    /// See [`prefer_number_then_text`]
    fn prefer_number_then_text(&self) -> Result<NumberOrText> {
        prefer_number_then_text(self)
    }

    /// See [`prefer_long_then_string`]
    fn prefer_long_then_string(&self) -> Result<String> {
        prefer_long_then_string(self)
    }

    /// See [`is_numeric`]
    fn is_numeric(&self) -> bool {
        is_numeric(self)
    }
}

impl<C: ReadCell + ?Sized> CellExt for C {}

fn double<C: ReadCell + ?Sized>(cell: &C, target: Target) -> Result<f64> {
    if cell.kind() == CellKind::Numeric {
        return number(cell, target);
    }
    let raw = text(cell, target)?;
    let not_a_number = |why: String| Error::CoercionFailed {
        address: cell.address(),
        target,
        reason: format!("\"{}\" is not a number ({})", raw, why),
    };
    // Rust also parses "inf" and "nan"; only finite decimals count
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(not_a_number("not finite".into())),
        Err(e) => Err(not_a_number(e.to_string())),
    }
}

fn integer<C: ReadCell + ?Sized>(cell: &C, target: Target) -> Result<i64> {
    let value = number(cell, target)?;
    truncate(value).ok_or_else(|| out_of_range(cell, target, value))
}

fn text<C: ReadCell + ?Sized>(cell: &C, target: Target) -> Result<&str> {
    cell.read_text().map_err(|e| failed(cell, target, e))
}

fn number<C: ReadCell + ?Sized>(cell: &C, target: Target) -> Result<f64> {
    cell.read_number().map_err(|e| failed(cell, target, e))
}

/// Truncate toward zero; `None` for NaN, infinities and values outside `i64`
fn truncate(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let truncated = value.trunc();
    if truncated.is_finite() && truncated >= -LIMIT && truncated < LIMIT {
        Some(truncated as i64)
    } else {
        None
    }
}

fn failed<C: ReadCell + ?Sized>(cell: &C, target: Target, source: sheetcraft_core::Error) -> Error {
    Error::CoercionFailed {
        address: cell.address(),
        target,
        reason: source.to_string(),
    }
}

fn out_of_range<C: ReadCell + ?Sized>(cell: &C, target: Target, value: f64) -> Error {
    Error::CoercionFailed {
        address: cell.address(),
        target,
        reason: format!("{} has no integer value", value),
    }
}
