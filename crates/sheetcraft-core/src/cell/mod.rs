//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] and [`CellKind`] - The value stored in a cell
//! - [`Cell`] - A located, read-only view of a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`CellData`] - Complete cell data including value and style

mod address;
mod storage;
mod value;
mod view;

pub use address::{CellAddress, CellRange};
pub use storage::{CellData, CellStorage};
pub use value::{date_to_serial, CellKind, CellValue, SharedString};
pub use view::Cell;
