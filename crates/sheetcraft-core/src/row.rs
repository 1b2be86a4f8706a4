//! Row view

use crate::cell::Cell;
use crate::worksheet::Worksheet;

/// Read-only view of one worksheet row
///
/// Cells are indexed from 0; indices with no prior write read as blank.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    sheet: &'a Worksheet,
    index: u32,
}

impl<'a> Row<'a> {
    /// Create a view of row `index` of `sheet`
    pub fn new(sheet: &'a Worksheet, index: u32) -> Self {
        Self { sheet, index }
    }

    /// Row index (0-based)
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The worksheet this row belongs to
    pub fn sheet(&self) -> &'a Worksheet {
        self.sheet
    }

    /// Get the cell at `col`, blank if never written
    pub fn cell(&self, col: u16) -> Cell<'a> {
        self.sheet.cell(self.index, col)
    }

    /// One past the last materialized cell index (0 for an empty row)
    pub fn extent(&self) -> u32 {
        self.sheet.row_extent(self.index)
    }

    /// Iterate over materialized cells in column order
    pub fn cells(&self) -> impl Iterator<Item = Cell<'a>> + 'a {
        let index = self.index;
        self.sheet
            .cells()
            .iter_row(index)
            .map(move |(col, data)| Cell::new(index, col, Some(data)))
    }

    /// Check if no cell in this row was ever materialized
    pub fn is_empty(&self) -> bool {
        self.extent() == 0
    }
}
