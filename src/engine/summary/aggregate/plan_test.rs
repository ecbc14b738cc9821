use crate::engine::errors::SummaryError;
use crate::engine::summary::aggregate::plan::{AggKind, AggregateField, AggregationSpec};
use crate::engine::types::LogicalType;
use crate::test_helpers::factories::TableFactory;

#[test]
fn agg_kind_parses_case_insensitively() {
    assert_eq!("sum".parse::<AggKind>().unwrap(), AggKind::Sum);
    assert_eq!("NUnique".parse::<AggKind>().unwrap(), AggKind::NUnique);
    assert_eq!(" mean ".parse::<AggKind>().unwrap(), AggKind::Mean);
    for kind in AggKind::ALL {
        assert_eq!(kind.as_str().parse::<AggKind>().unwrap(), kind);
    }
}

#[test]
fn agg_kind_rejects_unknown() {
    let err = "median".parse::<AggKind>().unwrap_err();
    assert!(matches!(err, SummaryError::InvalidAggregation(msg) if msg.contains("median")));
}

#[test]
fn aggregate_field_parses_field_and_kind() {
    let f: AggregateField = "Amount:sum".parse().unwrap();
    assert_eq!(f, AggregateField::new("Amount", AggKind::Sum));

    let f: AggregateField = "a:b:count".parse().unwrap();
    assert_eq!(f.field, "a:b");
    assert_eq!(f.kind, AggKind::Count);
}

#[test]
fn aggregate_field_rejects_malformed_input() {
    assert!(matches!(
        "Amount".parse::<AggregateField>(),
        Err(SummaryError::InvalidInput(_))
    ));
    assert!(matches!(
        ":sum".parse::<AggregateField>(),
        Err(SummaryError::InvalidInput(_))
    ));
    assert!(matches!(
        "Amount:avg".parse::<AggregateField>(),
        Err(SummaryError::InvalidAggregation(_))
    ));
}

#[test]
fn spec_push_keeps_position_and_updates_kind() {
    let spec = AggregationSpec::new()
        .with("a", AggKind::Sum)
        .with("b", AggKind::First)
        .with("a", AggKind::Max);

    let names: Vec<&str> = spec.fields().iter().map(|f| f.field.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(spec.kind_of("a"), Some(AggKind::Max));
    assert_eq!(spec.kind_of("z"), None);
}

#[test]
fn spec_without_drops_group_column() {
    let spec = AggregationSpec::new()
        .with("Country", AggKind::First)
        .with("Amount", AggKind::Sum);
    let trimmed = spec.without("Country");
    assert_eq!(trimmed.len(), 1);
    assert_eq!(trimmed.fields()[0].field, "Amount");
}

#[test]
fn resolve_binds_columns() {
    let table = TableFactory::countries().create();
    let spec = AggregationSpec::new().with("Amount", AggKind::Sum);
    let resolved = spec.resolve(&table).unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "Amount");
    assert_eq!(resolved[0].column, 1);
    assert_eq!(resolved[0].kind, AggKind::Sum);
    assert_eq!(resolved[0].ty, LogicalType::Integer);
}

#[test]
fn resolve_reports_missing_column() {
    let table = TableFactory::countries().create();
    let spec = AggregationSpec::new().with("Missing", AggKind::Sum);
    let err = spec.resolve(&table).unwrap_err();
    assert!(matches!(err, SummaryError::MissingColumn(name) if name == "Missing"));
}

#[test]
fn resolve_rejects_numeric_kind_over_text_column() {
    let table = TableFactory::countries().create();
    let spec = AggregationSpec::new().with("Country", AggKind::Mean);
    assert!(matches!(
        spec.resolve(&table),
        Err(SummaryError::InvalidAggregation(_))
    ));

    let spec = AggregationSpec::new().with("Country", AggKind::Max);
    assert!(spec.resolve(&table).is_ok());
}
