//! Property tests for header lookup and coercion

use proptest::prelude::*;
use sheetcraft::coerce::{
    as_display_string, as_double, as_long, prefer_long_then_string, prefer_number_then_text,
    prefer_string_then_int,
};
use sheetcraft::prelude::*;
use sheetcraft::{header_texts, resolve_column_with};

/// Header names that never collide with the probe name "X"
fn header_strategy() -> impl Strategy<Value = String> {
    "[a-wA-W][a-zA-Z0-9 ]{0,12}"
}

/// Cell contents: blank, text or number
fn value_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Blank),
        "[ ]?[0-9a-z.-]{0,8}[ ]?".prop_map(CellValue::text),
        (-1.0e6f64..1.0e6f64).prop_map(CellValue::Number),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A header present once is found at its index for any overscan
    #[test]
    fn prop_unique_header_found(
        headers in prop::collection::vec(header_strategy(), 0..30),
        position in any::<prop::sample::Index>(),
        overscan in 0u16..40,
    ) {
        let at = position.index(headers.len() + 1);
        let mut sheet = Worksheet::new("Props");
        for (col, header) in headers.iter().enumerate() {
            let col = if col >= at { col + 1 } else { col };
            sheet.set_cell_value_at(0, col as u16, header.as_str()).unwrap();
        }
        sheet.set_cell_value_at(0, at as u16, "X").unwrap();

        let options = ResolverOptions::with_overscan(overscan);
        prop_assert_eq!(resolve_column_with(&sheet, "X", &options).unwrap(), at as u16);
    }

    /// A missing header fails and lists exactly the text headers present
    #[test]
    fn prop_missing_header_lists_headers(
        headers in prop::collection::vec(header_strategy(), 0..30),
        overscan in 0u16..40,
    ) {
        let mut sheet = Worksheet::new("Props");
        for (col, header) in headers.iter().enumerate() {
            sheet.set_cell_value_at(0, col as u16, header.as_str()).unwrap();
        }

        let options = ResolverOptions::with_overscan(overscan);
        match resolve_column_with(&sheet, "X", &options) {
            Err(Error::ColumnNotFound { headers: listed, .. }) => {
                prop_assert_eq!(&listed, &headers);
                prop_assert_eq!(header_texts(&sheet, &options), headers);
            }
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }

    /// Coercing the same unmodified cell twice gives the same answer
    #[test]
    fn prop_coercions_idempotent(value in value_strategy()) {
        let mut sheet = Worksheet::new("Props");
        sheet.set_cell_value_at(2, 3, value).unwrap();
        let cell = sheet.cell(2, 3);

        prop_assert_eq!(as_display_string(&cell), as_display_string(&cell));
        prop_assert_eq!(as_long(&cell), as_long(&cell));
        prop_assert_eq!(prefer_string_then_int(&cell), prefer_string_then_int(&cell));
        prop_assert_eq!(prefer_long_then_string(&cell), prefer_long_then_string(&cell));

        let first = as_double(&cell);
        let second = as_double(&cell);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert!(a == b || (a.is_nan() && b.is_nan())),
            (a, b) => prop_assert_eq!(a, b),
        }
        let first = prefer_number_then_text(&cell);
        prop_assert_eq!(first, prefer_number_then_text(&cell));
    }

    /// Text reads never yield NaN or an infinity
    #[test]
    fn prop_text_double_is_finite(raw in "[+-]?(?i:nan|inf|infinity|[0-9]{1,3}e[0-9]{3})") {
        let mut sheet = Worksheet::new("Props");
        sheet.set_cell_value_at(0, 0, raw.as_str()).unwrap();
        let cell = sheet.cell(0, 0);

        match as_double(&cell) {
            Ok(value) => prop_assert!(value.is_finite(), "{:?} read as {}", raw, value),
            Err(err) => prop_assert!(matches!(err, Error::CoercionFailed { .. }), "unexpected error: {:?}", err),
        }
    }

    /// Integer reads of numbers truncate toward zero
    #[test]
    fn prop_long_truncates(n in -1.0e15f64..1.0e15f64) {
        let mut sheet = Worksheet::new("Props");
        sheet.set_cell_value_at(0, 0, n).unwrap();
        let cell = sheet.cell(0, 0);

        prop_assert_eq!(as_long(&cell).unwrap(), n.trunc() as i64);
        prop_assert_eq!(as_display_string(&cell).unwrap(), (n.trunc() as i64).to_string());
    }

    /// Numbers written as text read back as the same number
    #[test]
    fn prop_numeric_text_parses(n in -1.0e9f64..1.0e9f64, pad in "[ ]{0,3}") {
        let mut sheet = Worksheet::new("Props");
        sheet.set_cell_value_at(0, 0, format!("{pad}{n}{pad}")).unwrap();

        prop_assert_eq!(as_double(&sheet.cell(0, 0)).unwrap(), n);
    }
}
