//! Defined names
//!
//! A defined name gives a workbook-wide label to a range, e.g. `Choices` →
//! `'Lists'!$A$1:$A$3`. List validations use them as their source so the
//! choices can live on another sheet.

use std::collections::HashMap;

use crate::cell::{CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::MAX_ROWS;

/// Maximum length of a defined name
pub const MAX_NAME_LEN: usize = 255;

/// A workbook-scoped named range
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRange {
    /// The name; lookups ignore case
    pub name: String,
    /// Reference text, e.g. `'Lists'!$A$1:$A$3`
    pub refers_to: String,
}

impl NamedRange {
    /// Create a new named range
    pub fn new(name: impl Into<String>, refers_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refers_to: refers_to.into(),
        }
    }

    /// Create a name referring to an absolute range on a sheet
    pub fn for_range(name: impl Into<String>, sheet_name: &str, range: &CellRange) -> Self {
        let absolute = CellRange::new(
            CellAddress::absolute(range.start.row, range.start.col),
            CellAddress::absolute(range.end.row, range.end.col),
        );
        let refers_to = format!("{}!{}", quote_sheet_name(sheet_name), absolute);
        Self::new(name, refers_to)
    }
}

/// Quote a sheet name for use in a reference (`'My Sheet'`), doubling quotes
pub fn quote_sheet_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// Check that `name` is usable as a defined name
///
/// A name starts with a letter, `_` or `\`, continues with letters, digits,
/// `_`, `.` or `\`, and must not read as a cell reference in either A1
/// (`AB12`) or R1C1 (`R2C3`, `R`, `C`) notation.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |why: String| Error::InvalidName(format!("'{}' {}", name, why));

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(Error::InvalidName("name cannot be empty".into())),
        Some(c) if c.is_alphabetic() || c == '_' || c == '\\' => {}
        Some(c) => return Err(invalid(format!("cannot start with '{}'", c))),
    }
    if let Some(c) = chars.find(|&c| !(c.is_alphanumeric() || matches!(c, '_' | '.' | '\\'))) {
        return Err(invalid(format!("cannot contain '{}'", c)));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(invalid(format!("is longer than {} characters", MAX_NAME_LEN)));
    }
    if is_a1_reference(name) || is_r1c1_reference(name) {
        return Err(invalid("reads as a cell reference".into()));
    }
    Ok(())
}

fn is_a1_reference(name: &str) -> bool {
    let split = name
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(name.len());
    let (letters, digits) = name.split_at(split);
    CellAddress::letters_to_column(letters).is_ok()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits
            .parse::<u32>()
            .is_ok_and(|row| (1..=MAX_ROWS).contains(&row))
}

fn is_r1c1_reference(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    let skip_digits = |s: &str| s.trim_start_matches(|c: char| c.is_ascii_digit()).to_string();

    let (has_row, rest) = match upper.strip_prefix('R') {
        Some(rest) => (true, skip_digits(rest)),
        None => (false, upper.clone()),
    };
    let (has_col, rest) = match rest.strip_prefix('C') {
        Some(rest) => (true, skip_digits(rest)),
        None => (false, rest),
    };
    (has_row || has_col) && rest.is_empty()
}

/// Collection of workbook-scoped names with case-insensitive lookup
#[derive(Debug, Default, Clone)]
pub struct NamedRangeCollection {
    /// Keyed by lowercase name
    ranges: HashMap<String, NamedRange>,
}

impl NamedRangeCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new named range
    ///
    /// Fails if the name is not a valid defined name or is already defined.
    pub fn define(&mut self, range: NamedRange) -> Result<()> {
        validate_name(&range.name)?;

        let key = range.name.to_lowercase();
        if self.ranges.contains_key(&key) {
            return Err(Error::InvalidName(format!(
                "'{}' already exists",
                range.name
            )));
        }

        self.ranges.insert(key, range);
        Ok(())
    }

    /// Get a named range by name
    pub fn get(&self, name: &str) -> Option<&NamedRange> {
        self.ranges.get(&name.to_lowercase())
    }

    /// Check if a name is defined
    pub fn contains(&self, name: &str) -> bool {
        self.ranges.contains_key(&name.to_lowercase())
    }

    /// Get the number of named ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
