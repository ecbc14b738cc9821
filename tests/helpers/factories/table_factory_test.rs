use crate::engine::types::{LogicalType, ScalarValue};
use crate::test_helpers::factories::TableFactory;

#[test]
fn countries_table_matches_fixture() {
    let table = TableFactory::countries().create();
    assert_eq!(table.columns(), &["Country", "Amount"]);
    assert_eq!(table.len(), 4);
    assert_eq!(table.column_type(1), LogicalType::Integer);
}

#[test]
fn sales_table_keeps_null_country() {
    let table = TableFactory::sales().create();
    assert_eq!(table.len(), 7);
    assert_eq!(table.value(6, 0), &ScalarValue::Null);
    assert_eq!(table.value(3, 3), &ScalarValue::Null);
}
