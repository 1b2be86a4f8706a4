//! Worksheet type

use crate::cell::{Cell, CellData, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::style::Style;
use crate::validation::DataValidation;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
    /// Visibility state
    visibility: SheetVisibility,
    /// Data validations
    data_validations: Vec<DataValidation>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            visibility: SheetVisibility::Visible,
            data_validations: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    ///
    /// Prefer [`Workbook::rename_worksheet`](crate::Workbook::rename_worksheet),
    /// which validates the name against the other sheets.
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Get the visibility state
    pub fn visibility(&self) -> SheetVisibility {
        self.visibility
    }

    /// Set the visibility state
    pub fn set_visibility(&mut self, visibility: SheetVisibility) {
        self.visibility = visibility;
    }

    /// Check if the sheet is visible
    pub fn is_visible(&self) -> bool {
        self.visibility == SheetVisibility::Visible
    }

    // === Cell Access ===

    /// Get a read-only view of the cell at row and column indices
    ///
    /// Cells that were never written read as blank; nothing is materialized.
    pub fn cell(&self, row: u32, col: u16) -> Cell<'_> {
        Cell::new(row, col, self.cells.get(row, col))
    }

    /// Get a read-only view of a row
    pub fn row(&self, index: u32) -> Row<'_> {
        Row::new(self, index)
    }

    /// Get the stored cell data, if the cell was materialized
    pub fn cell_data(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get a cell for writing, materializing a blank one on miss
    pub fn cell_mut(&mut self, row: u32, col: u16) -> Result<&mut CellData> {
        self.validate_cell_position(row, col)?;
        Ok(self.cells.get_or_insert(row, col))
    }

    /// Get cell value by indices
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell(row, col).value().clone()
    }

    /// Get a style by its index in this worksheet's style pool.
    pub fn style_by_index(&self, style_index: u32) -> Option<&Style> {
        self.cells.style_pool().get(style_index)
    }

    /// Get the style applied to a cell (the default style if none was set)
    pub fn cell_style_at(&self, row: u32, col: u16) -> &Style {
        let idx = self.cell(row, col).style_index();
        self.style_by_index(idx)
            .unwrap_or_else(|| self.cells.style_pool().default_style())
    }

    // === Cell Modification ===

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a cell style by row and column indices
    ///
    /// Styles are deduplicated through the sheet's style pool, so cells never
    /// share a mutable style object.
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let style_index = self.cells.style_pool_mut().get_or_insert(style.clone());
        self.cells.set_style(row, col, style_index);
        Ok(())
    }

    // === Rows and Columns ===

    /// One past the last materialized column of a row (0 for an empty row)
    pub fn row_extent(&self, row: u32) -> u32 {
        self.cells.row_extent(row)
    }

    /// Index of the last row holding any materialized cell
    pub fn last_row_index(&self) -> Option<u32> {
        self.cells.last_row()
    }

    /// Get column width
    pub fn column_width(&self, col: u16) -> f64 {
        self.cells.column_width(col)
    }

    /// Set column width
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.cells.set_column_width(col, width);
    }

    // === Data Validation ===

    /// Add a data validation rule
    pub fn add_data_validation(&mut self, validation: DataValidation) {
        self.data_validations.push(validation);
    }

    /// Get all data validations
    pub fn data_validations(&self) -> &[DataValidation] {
        &self.data_validations
    }

    /// Get the first data validation covering a cell
    pub fn data_validation_at(&self, row: u32, col: u16) -> Option<&DataValidation> {
        self.data_validations
            .iter()
            .find(|v| v.applies_to(row, col))
    }

    // === Storage ===

    /// Get the cell storage
    pub fn cells(&self) -> &CellStorage {
        &self.cells
    }

    /// Get the number of materialized cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the sheet has no materialized cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Validate cell position
    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(u32::from(col), MAX_COLS - 1));
        }
        Ok(())
    }
}

/// Sheet visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetVisibility {
    /// Shown as a tab
    #[default]
    Visible,
    /// Hidden, but the user can unhide it
    Hidden,
    /// Hidden and not listed in the unhide dialog
    VeryHidden,
}
