//! List data validation
//!
//! A list validation restricts cells to a set of choices and shows them in a
//! dropdown. The choices are either inline (`"Yes,No"`) or a formula that
//! refers to a range or a defined name (`"=Choices"`).
//!
//! ## Example
//!
//! ```rust
//! use sheetcraft_core::{CellRange, DataValidation, Worksheet};
//!
//! let mut sheet = Worksheet::new("Orders");
//!
//! let validation = DataValidation::list("Yes,No,Maybe")
//!     .with_range(CellRange::from_indices(0, 0, 9, 0));
//!
//! sheet.add_data_validation(validation);
//! assert!(sheet.data_validation_at(4, 0).is_some());
//! ```

use crate::cell::CellRange;

/// A list rule and the cells it covers
#[derive(Debug, Clone, PartialEq)]
pub struct DataValidation {
    /// Comma-separated values, or a formula starting with `=`
    source: String,
    /// Covered cells
    pub ranges: Vec<CellRange>,
    /// Whether the in-cell dropdown arrow is shown
    pub show_dropdown: bool,
}

impl DataValidation {
    /// A list rule with a dropdown
    ///
    /// `source` is either a comma-separated list of values (`"Yes,No"`) or a
    /// formula starting with `=` that refers to a range or defined name.
    pub fn list(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ranges: Vec::new(),
            show_dropdown: true,
        }
    }

    /// Cover another range
    pub fn with_range(mut self, range: CellRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Show or hide the dropdown arrow
    pub fn with_dropdown(mut self, show: bool) -> Self {
        self.show_dropdown = show;
        self
    }

    /// Whether the rule covers (`row`, `col`)
    pub fn applies_to(&self, row: u32, col: u16) -> bool {
        self.ranges.iter().any(|r| r.contains(row, col))
    }

    /// The list source
    pub fn list_source(&self) -> &str {
        &self.source
    }
}
