//! End-to-end use of the helpers on a small order sheet

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheetcraft::coerce::{as_display_string, as_double, as_long, is_numeric};
use sheetcraft::prelude::*;
use sheetcraft::{header_texts, replace_row, sheets};

fn order_book() -> Workbook {
    let mut wb = Workbook::empty();
    sheets::create_sheet_with_header(&mut wb, "Orders", ["Name", "Qty", "Price"], |sheet| {
        sheet.add_row(vec![
            CellInput::from("Widget"),
            CellInput::from(5.0),
            CellInput::from("12.50"),
        ])?;
        sheet.add_row(vec![
            CellInput::from("Gadget"),
            CellInput::from("3"),
            CellInput::from((7.25, 2)),
        ])?;
        Ok(())
    })
    .unwrap();
    wb
}

/// Header lookup followed by tolerant reads
#[test]
fn test_resolve_then_coerce() {
    let wb = order_book();
    let sheet = wb.worksheet_by_name("Orders").unwrap();

    let qty = resolve_column(sheet, "Qty").unwrap();
    let price = resolve_column(sheet, "Price").unwrap();
    assert_eq!((qty, price), (1, 2));

    assert_eq!(as_long(&sheet.cell(1, qty)).unwrap(), 5);
    assert_eq!(as_double(&sheet.cell(1, price)).unwrap(), 12.5);

    // Same columns, opposite storage
    assert_eq!(as_long(&sheet.cell(2, qty)).unwrap(), 3);
    assert_eq!(as_double(&sheet.cell(2, price)).unwrap(), 7.25);
    assert!(is_numeric(&sheet.cell(2, price)));
    assert!(!is_numeric(&sheet.cell(2, qty)));
}

/// Totals computed over the data rows
#[test]
fn test_totals_over_data_rows() {
    let wb = order_book();
    let sheet = wb.worksheet(0).unwrap();

    let mut total = 0.0;
    for row in sheet.data_rows(1, &RowScanOptions::default()) {
        let qty = sheet.cell_by_name(row.index(), "Qty").unwrap().as_long().unwrap();
        let price = sheet
            .cell_by_name(row.index(), "Price")
            .unwrap()
            .as_double()
            .unwrap();
        total += qty as f64 * price;
    }
    assert_eq!(total, 5.0 * 12.5 + 3.0 * 7.25);
}

/// A missing column reports what the header row does contain
#[test]
fn test_missing_column_message() {
    let wb = order_book();
    let sheet = wb.worksheet(0).unwrap();

    let err = sheet.cell_by_name(1, "Total").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Column \"Total\" not found in sheet \"Orders\". Columns: \"Name\", \"Qty\", \"Price\""
    );
    assert_eq!(
        header_texts(sheet, &ResolverOptions::default()),
        vec!["Name".to_string(), "Qty".into(), "Price".into()]
    );
}

/// Display strings drop fractions, text passes through
#[test]
fn test_display_strings() {
    let mut wb = order_book();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_value(3, 0, 7.9).unwrap();

    assert_eq!(as_display_string(&sheet.cell(3, 0)).unwrap(), "7");
    assert_eq!(as_display_string(&sheet.cell(1, 0)).unwrap(), "Widget");
    assert_eq!(
        sheet.cell(1, 1).prefer_string_then_int().unwrap(),
        TextOrInteger::Integer(5)
    );
    assert_eq!(
        sheet.cell(2, 1).prefer_number_then_text().unwrap(),
        NumberOrText::Text("3".into())
    );
}

/// Reads never materialize cells
#[test]
fn test_reads_leave_sheet_untouched() {
    let wb = order_book();
    let sheet = wb.worksheet(0).unwrap();
    let before = sheet.cell_count();

    let _ = resolve_column(sheet, "Nope");
    let _ = as_double(&sheet.cell(40, 7));
    let _ = sheet.data_rows(0, &RowScanOptions::default());

    assert_eq!(sheet.cell_count(), before);
    assert_eq!(sheet.row_extent(0), 3);
}

/// Dropdown on the Name column plus a dated row copied to a report sheet
#[test]
fn test_dropdown_and_report() {
    let mut wb = order_book();
    create_dropdown_list(&mut wb, 0, 3, 0, "Products", &["Widget", "Gadget"]).unwrap();

    let orders = wb.worksheet_mut(0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    orders.set_value(1, 3, date).unwrap();

    let source = wb.worksheet(0).unwrap().clone();
    let report_index = wb.add_worksheet_with_name("Report").unwrap();
    let report = wb.worksheet_mut(report_index).unwrap();
    replace_row(report, 0, &source, 1).unwrap();

    assert_eq!(report.cell(0, 0).read_text().unwrap(), "Widget");
    assert_eq!(report.cell(0, 3).read_number().unwrap(), 45292.0);
    assert!(report.cell_style_at(0, 3).number_format.is_date_format());

    let names: Vec<&str> = wb.worksheets().map(|ws| ws.name()).collect();
    assert_eq!(names, vec!["Orders", "Products", "Report"]);
    assert_eq!(
        wb.worksheet(1).unwrap().visibility(),
        SheetVisibility::VeryHidden
    );
    assert_eq!(
        wb.worksheet(0)
            .unwrap()
            .data_validation_at(3, 0)
            .map(|v| v.list_source()),
        Some("=Products")
    );
}
