//! Cell value types

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Represents the value stored in a cell
///
/// A cell holds exactly one kind of value at a time. Dates are stored as
/// serial numbers with a date number format, as spreadsheets do.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Blank,

    /// Text value
    Text(SharedString),

    /// Numeric value (all numbers stored as f64, including dates)
    Number(f64),
}

/// The kind of value a cell stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// No value
    Blank,
    /// Text value
    Text,
    /// Numeric value
    Numeric,
}

impl CellKind {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Blank => "blank",
            CellKind::Text => "text",
            CellKind::Numeric => "numeric",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: AsRef<str>>(s: S) -> Self {
        CellValue::Text(SharedString::new(s))
    }

    /// The kind of value stored
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Blank => CellKind::Blank,
            CellValue::Text(_) => CellKind::Text,
            CellValue::Number(_) => CellKind::Numeric,
        }
    }

    /// Check if the cell is blank
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Blank, or text with no characters
    pub fn is_blank_or_empty(&self) -> bool {
        match self {
            CellValue::Blank => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Get the number if this is a numeric value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Blank => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s.as_str()),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::text(s)
    }
}

/// Convert a date-time to a serial number in the 1900 date system
///
/// Day 0 is 1899-12-30 so that serials line up with spreadsheet
/// applications for every date after 1900-03-01.
pub fn date_to_serial(dt: NaiveDateTime) -> f64 {
    let days = dt.date().num_days_from_ce() - SERIAL_EPOCH_DAYS_FROM_CE;
    let time = dt.time();
    let seconds =
        f64::from(time.num_seconds_from_midnight()) + f64::from(time.nanosecond()) / 1e9;
    f64::from(days) + seconds / SECONDS_PER_DAY
}

/// 1899-12-30 counted in days from 0001-01-01 (day 1)
const SERIAL_EPOCH_DAYS_FROM_CE: i32 = 693_594;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Shared immutable string
///
/// Header and list values repeat across rows; `Arc<str>` lets copies share
/// the same allocation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the string
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString::new(s)
    }
}
