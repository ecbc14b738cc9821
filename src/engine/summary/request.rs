use crate::engine::summary::aggregate::plan::AggregationSpec;
use crate::engine::summary::display_mode::DisplayMode;
use crate::engine::summary::empty_fields::EmptyFields;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_CSV_FILENAME: &str = "analysis_result.csv";

/// Everything a summarize run needs besides the table itself
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub group_by: String,
    pub aggregations: AggregationSpec,
    pub sort_by: String,
    pub top_n: usize,
    pub empty_fields: EmptyFields,
    pub display_mode: DisplayMode,
    /// Joined onto the results directory as is; callers pick a safe name
    pub csv_filename: String,
}

impl SummaryRequest {
    pub fn new(
        group_by: impl Into<String>,
        aggregations: AggregationSpec,
        sort_by: impl Into<String>,
    ) -> Self {
        Self {
            group_by: group_by.into(),
            aggregations,
            sort_by: sort_by.into(),
            top_n: DEFAULT_TOP_N,
            empty_fields: EmptyFields::NoneProvided,
            display_mode: DisplayMode::Some,
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_empty_fields(mut self, empty_fields: EmptyFields) -> Self {
        self.empty_fields = empty_fields;
        self
    }

    pub fn with_csv_filename(mut self, filename: impl Into<String>) -> Self {
        self.csv_filename = filename.into();
        self
    }
}
