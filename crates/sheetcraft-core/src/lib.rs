//! # sheetcraft-core
//!
//! In-memory document model used by the sheetcraft helpers.
//!
//! This crate provides the fundamental types:
//! - [`CellValue`] and [`CellKind`] - Blank, text or numeric cell contents
//! - [`Cell`] and [`Row`] - Read-only views that see unwritten cells as blank
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`Style`] - Number formats, deduplicated through a [`StylePool`]
//! - [`Workbook`], [`Worksheet`] - The main document structures
//!
//! ## Example
//!
//! ```rust
//! use sheetcraft_core::{CellKind, CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value_at(0, 0, "Qty").unwrap();
//! sheet.set_cell_value_at(1, 0, 42.0).unwrap();
//!
//! assert_eq!(sheet.cell(1, 0).kind(), CellKind::Numeric);
//! assert_eq!(sheet.cell(1, 0).read_number().unwrap(), 42.0);
//! assert_eq!(sheet.cell(7, 3).value(), &CellValue::Blank);
//! ```

pub mod cell;
pub mod error;
pub mod named_range;
pub mod row;
pub mod style;
pub mod validation;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{date_to_serial, Cell, CellAddress, CellData, CellKind, CellRange, CellValue};
pub use error::{Error, Result};
pub use named_range::{validate_name, NamedRange, NamedRangeCollection};
pub use row::Row;
pub use style::{NumberFormat, Style, StylePool};
pub use validation::DataValidation;
pub use workbook::Workbook;
pub use worksheet::{SheetVisibility, Worksheet};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
