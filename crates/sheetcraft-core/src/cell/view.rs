//! Read-only cell view

use super::{CellAddress, CellData, CellKind, CellValue};
use crate::error::{Error, Result};

static BLANK: CellData = CellData {
    value: CellValue::Blank,
    style_index: 0,
};

/// A located, read-only view of one cell
///
/// Views over cells that were never written see a blank value with the
/// default style; creating one never touches the sheet.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    address: CellAddress,
    data: &'a CellData,
}

impl<'a> Cell<'a> {
    /// Create a view over stored data, or a blank cell when `data` is `None`
    pub fn new(row: u32, col: u16, data: Option<&'a CellData>) -> Self {
        Self {
            address: CellAddress::new(row, col),
            data: data.unwrap_or(&BLANK),
        }
    }

    /// Location of the cell
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// Row index (0-based)
    pub fn row(&self) -> u32 {
        self.address.row
    }

    /// Column index (0-based)
    pub fn col(&self) -> u16 {
        self.address.col
    }

    /// The stored value
    pub fn value(&self) -> &'a CellValue {
        &self.data.value
    }

    /// Style pool index (0 = default style)
    pub fn style_index(&self) -> u32 {
        self.data.style_index
    }

    /// The kind of value stored
    pub fn kind(&self) -> CellKind {
        self.data.value.kind()
    }

    /// Read the cell as text
    ///
    /// Fails with [`Error::WrongCellKind`] unless the cell stores text.
    pub fn read_text(&self) -> Result<&'a str> {
        self.data
            .value
            .as_text()
            .ok_or_else(|| self.wrong_kind(CellKind::Text))
    }

    /// Read the cell as a number
    ///
    /// Fails with [`Error::WrongCellKind`] unless the cell stores a number.
    pub fn read_number(&self) -> Result<f64> {
        self.data
            .value
            .as_number()
            .ok_or_else(|| self.wrong_kind(CellKind::Numeric))
    }

    fn wrong_kind(&self, expected: CellKind) -> Error {
        Error::WrongCellKind {
            address: self.address,
            expected,
            actual: self.kind(),
        }
    }
}
