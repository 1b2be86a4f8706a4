//! Error types for sheetcraft

use std::fmt;

use thiserror::Error;

use crate::coerce::Target;
use sheetcraft_core::CellAddress;

/// Result type for sheetcraft operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the sheetcraft helpers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No header cell in row 0 matches the requested column name
    #[error("Column \"{column}\" not found in sheet \"{sheet}\". Columns: {}", HeaderList(.headers))]
    ColumnNotFound {
        column: String,
        sheet: String,
        /// Text headers present, in column order
        headers: Vec<String>,
    },

    /// Every fallback of a coercion failed
    #[error("Cannot read cell {address} as {target}: {reason}")]
    CoercionFailed {
        address: CellAddress,
        target: Target,
        reason: String,
    },

    /// A dropdown list needs at least one choice
    #[error("Dropdown list \"{0}\" has no choices")]
    EmptyChoices(String),

    /// Document model error
    #[error("Core error: {0}")]
    Core(#[from] sheetcraft_core::Error),
}

/// Renders headers as `"A", "B", "C"`
struct HeaderList<'a>(&'a [String]);

impl fmt::Display for HeaderList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, header) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\"", header)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_message() {
        let err = Error::ColumnNotFound {
            column: "Qty".into(),
            sheet: "Orders".into(),
            headers: vec!["Name".into(), "Price".into()],
        };
        assert_eq!(
            err.to_string(),
            "Column \"Qty\" not found in sheet \"Orders\". Columns: \"Name\", \"Price\""
        );
    }

    #[test]
    fn test_coercion_failed_message() {
        let err = Error::CoercionFailed {
            address: CellAddress::new(1, 2),
            target: Target::Double,
            reason: "invalid float literal".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read cell C2 as double: invalid float literal"
        );
    }
}
