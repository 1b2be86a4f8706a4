//! Cell styling types
//!
//! Only number formats are modeled; they decide how stored numbers (rounded
//! values, date serials) are displayed.
//! - [`Style`] - Complete cell style
//! - [`NumberFormat`] - Built-in or custom number format
//! - [`StylePool`] - Deduplicating store that cells index into

mod number_format;
mod pool;

pub use number_format::NumberFormat;
pub use pool::StylePool;

/// Complete cell style
///
/// Styles are deduplicated via [`StylePool`]; cells hold an index, so
/// changing one cell's style never leaks into another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Number format
    pub number_format: NumberFormat,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = NumberFormat::Custom(format.into());
        self
    }

    /// Set the number format
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Check if this is the default style
    pub fn is_default(&self) -> bool {
        self == &Style::default()
    }
}
