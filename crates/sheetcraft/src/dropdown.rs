//! Dropdown lists backed by a hidden sheet

use log::trace;
use sheetcraft_core::{
    validate_name, CellAddress, CellRange, DataValidation, NamedRange, SheetVisibility,
    Workbook, MAX_COLS, MAX_ROWS,
};

use crate::error::{Error, Result};

/// Restrict one cell to `choices`, shown as an in-cell dropdown
///
/// The choices go to column A of a new very-hidden sheet named `list_name`,
/// a workbook-scoped name `list_name` refers to them, and the cell at
/// (`row`, `col`) of sheet `sheet_index` gets a list validation sourced from
/// that name. `list_name` must work both as a sheet name and as a defined
/// name, so `"My List"` or `"AB12"` are refused. Nothing is changed when any
/// step would fail.
///
/// ```rust
/// use sheetcraft::dropdown::create_dropdown_list;
/// use sheetcraft::{SheetVisibility, Workbook};
///
/// let mut workbook = Workbook::new();
/// create_dropdown_list(&mut workbook, 0, 1, 2, "Status", &["Open", "Closed"]).unwrap();
///
/// let lists = workbook.worksheet_by_name("Status").unwrap();
/// assert_eq!(lists.visibility(), SheetVisibility::VeryHidden);
///
/// let sheet = workbook.worksheet(0).unwrap();
/// assert_eq!(sheet.data_validation_at(1, 2).unwrap().list_source(), "=Status");
/// ```
pub fn create_dropdown_list<S: AsRef<str>>(
    workbook: &mut Workbook,
    sheet_index: usize,
    row: u32,
    col: u16,
    list_name: &str,
    choices: &[S],
) -> Result<()> {
    if choices.is_empty() {
        return Err(Error::EmptyChoices(list_name.to_string()));
    }
    if choices.len() > MAX_ROWS as usize {
        return Err(sheetcraft_core::Error::RowOutOfBounds(
            u32::try_from(choices.len()).unwrap_or(u32::MAX),
            MAX_ROWS - 1,
        )
        .into());
    }
    if workbook.worksheet(sheet_index).is_none() {
        return Err(
            sheetcraft_core::Error::SheetOutOfBounds(sheet_index, workbook.sheet_count()).into(),
        );
    }
    if row >= MAX_ROWS {
        return Err(sheetcraft_core::Error::RowOutOfBounds(row, MAX_ROWS - 1).into());
    }
    if col >= MAX_COLS {
        return Err(
            sheetcraft_core::Error::ColumnOutOfBounds(u32::from(col), MAX_COLS - 1).into(),
        );
    }
    validate_name(list_name)?;
    if workbook.named_ranges().contains(list_name) {
        return Err(
            sheetcraft_core::Error::InvalidName(format!("'{}' already exists", list_name)).into(),
        );
    }

    let list_index = workbook.add_worksheet_with_name(list_name)?;
    trace!(
        "created list sheet {:?} with {} choices",
        list_name,
        choices.len()
    );

    // Bounds were checked above; the list sheet exists
    let last = (choices.len() - 1) as u32;
    if let Some(lists) = workbook.worksheet_mut(list_index) {
        lists.set_visibility(SheetVisibility::VeryHidden);
        for (row, choice) in (0..).zip(choices) {
            lists.set_cell_value_at(row, 0, AsRef::<str>::as_ref(choice))?;
        }
    }

    let range = CellRange::from_indices(0, 0, last, 0);
    workbook.define_name(NamedRange::for_range(list_name, list_name, &range))?;

    let validation = DataValidation::list(format!("={}", list_name))
        .with_range(CellRange::single(CellAddress::new(row, col)))
        .with_dropdown(true);
    if let Some(sheet) = workbook.worksheet_mut(sheet_index) {
        sheet.add_data_validation(validation);
    }
    Ok(())
}
