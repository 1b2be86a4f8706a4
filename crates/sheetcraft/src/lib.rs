//! # sheetcraft
//!
//! Convenience helpers over the sheetcraft in-memory spreadsheet model.
//!
//! ## Features
//!
//! - Column lookup by header text, tolerant of odd header cells
//! - Typed cell reads with a fixed fallback order (text ⇄ number)
//! - Writing text, numbers, rounded numbers and dates
//! - Row helpers: append, copy, by-name access, data-row detection
//! - Dropdown lists backed by a very-hidden sheet
//!
//! ## Example
//!
//! ```rust
//! use sheetcraft::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_header(["Name", "Qty", "Price"]).unwrap();
//! sheet.set_row(1, vec![CellInput::from("Widget"), 5.0.into(), "12.50".into()]).unwrap();
//!
//! let qty = resolve_column(sheet, "Qty").unwrap();
//! assert_eq!(qty, 1);
//! assert_eq!(sheet.cell(1, qty).as_long().unwrap(), 5);
//! assert_eq!(sheet.cell_by_name(1, "Price").unwrap().as_double().unwrap(), 12.5);
//! ```

pub mod coerce;
pub mod column;
pub mod dropdown;
pub mod error;
pub mod options;
pub mod prelude;
pub mod rows;
pub mod sheets;
pub mod value;

pub use coerce::{CellExt, NumberOrText, ReadCell, Target, TextOrInteger};
pub use column::{header_texts, resolve_column, resolve_column_with};
pub use dropdown::create_dropdown_list;
pub use error::{Error, Result};
pub use options::{ResolverOptions, RowScanOptions};
pub use rows::{copy_row, replace_row, SheetExt};
pub use sheets::{create_sheet_with_header, rename_sheet};
pub use value::{set_rounding, write_value, CellInput};

// Re-export core types
pub use sheetcraft_core::{
    date_to_serial,
    Cell,
    CellAddress,
    CellData,
    CellKind,
    CellRange,
    CellValue,
    DataValidation,
    // Error type of the document model
    Error as CoreError,
    NamedRange,
    NumberFormat,
    Row,
    SheetVisibility,
    Style,
    Workbook,
    Worksheet,
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};
