use crate::engine::errors::SummaryError;
use crate::engine::summary::{AggKind, AggregateField, DisplayMode, EmptyFields};
use crate::frontend::form::AnalysisForm;

fn form() -> AnalysisForm {
    AnalysisForm::new(vec![
        "Country".into(),
        "Customer".into(),
        "Amount".into(),
        "Units".into(),
    ])
}

fn fields(form: &AnalysisForm) -> Vec<(&str, AggKind)> {
    form.agg_fields()
        .iter()
        .map(|f| (f.field.as_str(), f.kind))
        .collect()
}

#[test]
fn first_column_is_initial_group_by() {
    let form = form();
    assert_eq!(form.group_by(), Some("Country"));
    assert_eq!(form.available_for_agg(), vec!["Customer", "Amount", "Units"]);
    assert_eq!(form.top_n, 10);
    assert_eq!(form.display_mode, DisplayMode::Some);
    assert_eq!(form.csv_filename, "analysis_result.csv");
}

#[test]
fn add_field_uses_first_available_column_with_sum() {
    let mut form = form();
    assert!(form.add_field());
    assert!(form.add_field());
    assert_eq!(
        fields(&form),
        vec![("Customer", AggKind::Sum), ("Customer", AggKind::Sum)]
    );
}

#[test]
fn add_field_fails_without_available_columns() {
    let mut form = AnalysisForm::new(vec!["Country".into()]);
    assert!(!form.add_field());
    assert!(form.agg_fields().is_empty());
}

#[test]
fn changing_group_by_drops_its_aggregations() {
    let mut form = form();
    form.push_field(AggregateField::new("Amount", AggKind::Sum)).unwrap();
    form.push_field(AggregateField::new("Units", AggKind::Max)).unwrap();

    form.select_group_by("Amount").unwrap();

    assert_eq!(form.group_by(), Some("Amount"));
    assert_eq!(fields(&form), vec![("Units", AggKind::Max)]);
    assert_eq!(
        form.available_for_agg(),
        vec!["Country", "Customer", "Units"]
    );
}

#[test]
fn select_group_by_rejects_unknown_column() {
    let mut form = form();
    assert!(matches!(
        form.select_group_by("Region"),
        Err(SummaryError::MissingColumn(c)) if c == "Region"
    ));
    assert_eq!(form.group_by(), Some("Country"));
}

#[test]
fn push_and_set_field_reject_group_column() {
    let mut form = form();
    assert!(matches!(
        form.push_field(AggregateField::new("Country", AggKind::Count)),
        Err(SummaryError::InvalidInput(_))
    ));

    form.add_field();
    assert!(matches!(
        form.set_field(0, "Country"),
        Err(SummaryError::InvalidInput(_))
    ));
    assert!(matches!(
        form.set_field(0, "Region"),
        Err(SummaryError::MissingColumn(_))
    ));
    assert!(matches!(
        form.set_field(3, "Amount"),
        Err(SummaryError::InvalidInput(_))
    ));
}

#[test]
fn rows_can_be_edited_and_reordered() {
    let mut form = form();
    form.add_field();
    form.add_field();
    form.add_field();
    form.set_field(1, "Amount").unwrap();
    form.set_field(2, "Units").unwrap();
    form.set_kind(2, AggKind::Mean).unwrap();

    form.move_up(2);
    assert_eq!(
        fields(&form),
        vec![
            ("Customer", AggKind::Sum),
            ("Units", AggKind::Mean),
            ("Amount", AggKind::Sum)
        ]
    );

    form.move_down(0);
    assert_eq!(form.agg_fields()[0].field, "Units");
    form.move_up(1);
    // edges are no-ops
    form.move_up(0);
    form.move_down(2);
    assert_eq!(
        fields(&form),
        vec![
            ("Customer", AggKind::Sum),
            ("Units", AggKind::Mean),
            ("Amount", AggKind::Sum)
        ]
    );

    let removed = form.remove(0).unwrap();
    assert_eq!(removed.field, "Customer");
    assert!(form.remove(5).is_none());
    assert_eq!(
        fields(&form),
        vec![("Units", AggKind::Mean), ("Amount", AggKind::Sum)]
    );
}

#[test]
fn sort_options_follow_aggregations() {
    let mut form = form();
    assert_eq!(
        form.sort_by_options(),
        vec!["Country", "Customer", "Amount", "Units"]
    );

    form.push_field(AggregateField::new("Units", AggKind::Sum)).unwrap();
    form.push_field(AggregateField::new("Amount", AggKind::Sum)).unwrap();
    assert_eq!(form.sort_by_options(), vec!["Units", "Amount"]);
}

#[test]
fn to_request_defaults_sort_to_first_option() {
    let mut form = form();
    form.push_field(AggregateField::new("Amount", AggKind::Sum)).unwrap();
    form.push_field(AggregateField::new("Customer", AggKind::NUnique))
        .unwrap();
    form.top_n = 3;
    form.display_mode = DisplayMode::All;
    form.empty_fields = vec!["Customer".into()];
    form.csv_filename = "out.csv".into();

    let request = form.to_request().unwrap();

    assert_eq!(request.group_by, "Country");
    assert_eq!(request.sort_by, "Amount");
    assert_eq!(request.top_n, 3);
    assert_eq!(request.display_mode, DisplayMode::All);
    assert_eq!(request.csv_filename, "out.csv");
    assert_eq!(request.aggregations.len(), 2);
    assert_eq!(request.aggregations.kind_of("Customer"), Some(AggKind::NUnique));
    assert_eq!(request.empty_fields, EmptyFields::Single("Customer".into()));
}

#[test]
fn to_request_keeps_explicit_sort() {
    let mut form = form();
    form.push_field(AggregateField::new("Amount", AggKind::Sum)).unwrap();
    form.sort_by = Some("Country".into());

    assert_eq!(form.to_request().unwrap().sort_by, "Country");
}

#[test]
fn to_request_without_columns_fails() {
    let form = AnalysisForm::new(Vec::new());
    assert!(matches!(
        form.to_request(),
        Err(SummaryError::InvalidInput(_))
    ));
}

#[test]
fn reset_keeps_columns() {
    let mut form = form();
    form.select_group_by("Customer").unwrap();
    form.add_field();
    form.top_n = 1;

    form.reset();

    assert_eq!(form, self::form());
}
