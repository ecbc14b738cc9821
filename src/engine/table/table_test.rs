use indoc::indoc;

use crate::engine::errors::TableError;
use crate::engine::table::Table;
use crate::engine::types::{LogicalType, ScalarValue};

#[test]
fn loads_header_and_infers_column_types() {
    let input = indoc! {"
        Country,Amount,Rate,Note
        A,10,1.5,first
        B,20,2,
        C,,3.25,x
    "};
    let table = Table::from_csv_reader(input.as_bytes()).unwrap();

    assert_eq!(table.columns(), &["Country", "Amount", "Rate", "Note"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.column_type(0), LogicalType::String);
    assert_eq!(table.column_type(1), LogicalType::Integer);
    assert_eq!(table.column_type(2), LogicalType::Float);
    assert_eq!(table.column_type(3), LogicalType::String);

    assert_eq!(table.value(1, 2), &ScalarValue::Float64(2.0));
    assert_eq!(table.value(2, 1), &ScalarValue::Null);
    assert_eq!(table.value(1, 3), &ScalarValue::Null);
}

#[test]
fn mixed_column_keeps_original_text() {
    let input = indoc! {"
        Code
        007
        abc
    "};
    let table = Table::from_csv_reader(input.as_bytes()).unwrap();
    assert_eq!(table.column_type(0), LogicalType::String);
    assert_eq!(table.value(0, 0), &ScalarValue::Utf8("007".into()));
}

#[test]
fn padded_numbers_stay_numeric() {
    let input = indoc! {"
        Country,Amount
        A, 10
        B,2.5 
        C,  
    "};
    let table = Table::from_csv_reader(input.as_bytes()).unwrap();
    assert_eq!(table.column_type(1), LogicalType::Float);
    assert_eq!(table.value(0, 1), &ScalarValue::Float64(10.0));
    assert_eq!(table.value(1, 1), &ScalarValue::Float64(2.5));
    assert_eq!(table.value(2, 1), &ScalarValue::Null);
}

#[test]
fn empty_input_is_rejected() {
    let err = Table::from_csv_reader("".as_bytes()).unwrap_err();
    assert!(matches!(err, TableError::EmptyInput));
}

#[test]
fn header_only_yields_empty_table() {
    let table = Table::from_csv_reader("a,b\n".as_bytes()).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.column_type(0), LogicalType::Null);
}

#[test]
fn ragged_row_reports_row_number() {
    let input = "a,b\n1,2\n3\n";
    let err = Table::from_csv_reader(input.as_bytes()).unwrap_err();
    match err {
        TableError::RaggedRow {
            row,
            expected,
            found,
        } => {
            assert_eq!(row, 3);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_columns_are_rejected() {
    let err = Table::from_csv_reader("a,a\n1,2\n".as_bytes()).unwrap_err();
    assert!(matches!(err, TableError::DuplicateColumn(name) if name == "a"));
}

#[test]
fn new_widens_integers_in_float_columns() {
    let table = Table::new(
        vec!["x".into()],
        vec![
            vec![ScalarValue::Int64(1)],
            vec![ScalarValue::Float64(2.5)],
        ],
    )
    .unwrap();
    assert_eq!(table.column_type(0), LogicalType::Float);
    assert_eq!(table.value(0, 0), &ScalarValue::Float64(1.0));
}

#[test]
fn head_keeps_columns_and_truncates_rows() {
    let table = Table::from_csv_reader("a\n1\n2\n3\n".as_bytes()).unwrap();
    let preview = table.head(2);
    assert_eq!(preview.columns(), table.columns());
    assert_eq!(preview.len(), 2);
    assert_eq!(table.head(10).len(), 3);
}

#[test]
fn column_index_lookup() {
    let table = Table::from_csv_reader("a,b\n1,2\n".as_bytes()).unwrap();
    assert_eq!(table.column_index("b"), Some(1));
    assert_eq!(table.column_index("z"), None);
}
