//! Prelude module - common imports for sheetcraft users
//!
//! ```rust
//! use sheetcraft::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellAddress,
    // Extension traits
    CellExt,
    CellInput,
    CellKind,
    CellRange,
    CellValue,
    // Error types
    Error,
    NumberFormat,
    NumberOrText,
    // Options
    ResolverOptions,
    Result,
    Row,
    RowScanOptions,
    SheetExt,
    SheetVisibility,
    TextOrInteger,
    // Main types
    Workbook,
    Worksheet,
    // Functions
    create_dropdown_list,
    resolve_column,
};
