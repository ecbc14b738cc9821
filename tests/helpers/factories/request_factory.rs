use crate::engine::summary::{AggKind, AggregationSpec, DisplayMode, EmptyFields, SummaryRequest};

pub struct RequestFactory {
    group_by: String,
    aggregations: AggregationSpec,
    sort_by: String,
    top_n: usize,
    display_mode: DisplayMode,
    empty_fields: EmptyFields,
    csv_filename: String,
}

impl RequestFactory {
    /// Group by Country, sum Amount, sort by Amount, top 1, some mode.
    pub fn new() -> Self {
        Self {
            group_by: "Country".into(),
            aggregations: AggregationSpec::new().with("Amount", AggKind::Sum),
            sort_by: "Amount".into(),
            top_n: 1,
            display_mode: DisplayMode::Some,
            empty_fields: EmptyFields::NoneProvided,
            csv_filename: "summary.csv".into(),
        }
    }

    pub fn with_group_by(mut self, column: &str) -> Self {
        self.group_by = column.to_string();
        self
    }

    /// Replaces the default aggregation list.
    pub fn with_aggs(mut self, aggs: &[(&str, AggKind)]) -> Self {
        self.aggregations = aggs
            .iter()
            .fold(AggregationSpec::new(), |spec, (f, k)| spec.with(*f, *k));
        self
    }

    pub fn with_sort_by(mut self, column: &str) -> Self {
        self.sort_by = column.to_string();
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_empty_fields(mut self, empty: EmptyFields) -> Self {
        self.empty_fields = empty;
        self
    }

    pub fn with_csv_filename(mut self, name: &str) -> Self {
        self.csv_filename = name.to_string();
        self
    }

    pub fn create(self) -> SummaryRequest {
        SummaryRequest::new(self.group_by, self.aggregations, self.sort_by)
            .with_top_n(self.top_n)
            .with_display_mode(self.display_mode)
            .with_empty_fields(self.empty_fields)
            .with_csv_filename(self.csv_filename)
    }
}
