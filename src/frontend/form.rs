use crate::engine::errors::SummaryError;
use crate::engine::summary::{
    AggKind, AggregateField, AggregationSpec, DEFAULT_CSV_FILENAME, DEFAULT_TOP_N, DisplayMode,
    EmptyFields, SummaryRequest,
};

/// Editable state behind one analysis run: the grouping column, an ordered
/// list of aggregation rows and the run options.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisForm {
    columns: Vec<String>,
    group_by: Option<String>,
    agg_fields: Vec<AggregateField>,
    pub sort_by: Option<String>,
    pub top_n: usize,
    pub display_mode: DisplayMode,
    pub csv_filename: String,
    pub empty_fields: Vec<String>,
}

impl AnalysisForm {
    /// New form over the columns of a loaded table. The first column is the
    /// initial grouping column.
    pub fn new(columns: Vec<String>) -> Self {
        let group_by = columns.first().cloned();
        Self {
            columns,
            group_by,
            agg_fields: Vec::new(),
            sort_by: None,
            top_n: DEFAULT_TOP_N,
            display_mode: DisplayMode::Some,
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
            empty_fields: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn group_by(&self) -> Option<&str> {
        self.group_by.as_deref()
    }

    pub fn agg_fields(&self) -> &[AggregateField] {
        &self.agg_fields
    }

    /// Switches the grouping column. Aggregation rows on the new grouping
    /// column are dropped.
    pub fn select_group_by(&mut self, column: &str) -> Result<(), SummaryError> {
        if !self.columns.iter().any(|c| c == column) {
            return Err(SummaryError::MissingColumn(column.to_string()));
        }
        self.group_by = Some(column.to_string());
        self.agg_fields.retain(|f| f.field != column);
        Ok(())
    }

    /// Columns that may be aggregated: everything except the grouping column.
    pub fn available_for_agg(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| Some(c.as_str()) != self.group_by.as_deref())
            .map(String::as_str)
            .collect()
    }

    /// Appends `(first available column, sum)`. Returns false when no column
    /// is available.
    pub fn add_field(&mut self) -> bool {
        let Some(first) = self.available_for_agg().first().map(|c| c.to_string()) else {
            return false;
        };
        self.agg_fields.push(AggregateField::new(first, AggKind::Sum));
        true
    }

    /// Appends a specific aggregation row.
    pub fn push_field(&mut self, field: AggregateField) -> Result<(), SummaryError> {
        self.check_available(&field.field)?;
        self.agg_fields.push(field);
        Ok(())
    }

    pub fn move_up(&mut self, idx: usize) {
        if idx > 0 && idx < self.agg_fields.len() {
            self.agg_fields.swap(idx, idx - 1);
        }
    }

    pub fn move_down(&mut self, idx: usize) {
        if idx + 1 < self.agg_fields.len() {
            self.agg_fields.swap(idx, idx + 1);
        }
    }

    pub fn remove(&mut self, idx: usize) -> Option<AggregateField> {
        (idx < self.agg_fields.len()).then(|| self.agg_fields.remove(idx))
    }

    pub fn set_field(&mut self, idx: usize, field: &str) -> Result<(), SummaryError> {
        self.check_available(field)?;
        let row = self.row_mut(idx)?;
        row.field = field.to_string();
        Ok(())
    }

    pub fn set_kind(&mut self, idx: usize, kind: AggKind) -> Result<(), SummaryError> {
        self.row_mut(idx)?.kind = kind;
        Ok(())
    }

    /// Aggregation fields, or every column while none is configured.
    pub fn sort_by_options(&self) -> Vec<&str> {
        if self.agg_fields.is_empty() {
            self.columns.iter().map(String::as_str).collect()
        } else {
            self.agg_fields.iter().map(|f| f.field.as_str()).collect()
        }
    }

    /// Forgets the aggregation rows and options but keeps the loaded columns.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.columns));
    }

    /// Builds the request for the current state. The sort column defaults to
    /// the first sort option.
    pub fn to_request(&self) -> Result<SummaryRequest, SummaryError> {
        let group_by = self
            .group_by
            .clone()
            .ok_or_else(|| SummaryError::InvalidInput("no group by column selected".to_string()))?;
        let sort_by = match &self.sort_by {
            Some(s) => s.clone(),
            None => self
                .sort_by_options()
                .first()
                .map(|s| s.to_string())
                .ok_or_else(|| SummaryError::InvalidInput("no sort column available".to_string()))?,
        };
        let aggregations: AggregationSpec = self.agg_fields.iter().cloned().collect();

        Ok(SummaryRequest::new(group_by, aggregations, sort_by)
            .with_top_n(self.top_n)
            .with_display_mode(self.display_mode)
            .with_empty_fields(EmptyFields::from_names(self.empty_fields.iter().cloned()))
            .with_csv_filename(self.csv_filename.clone()))
    }

    fn check_available(&self, field: &str) -> Result<(), SummaryError> {
        if self.available_for_agg().contains(&field) {
            Ok(())
        } else if self.columns.iter().any(|c| c == field) {
            Err(SummaryError::InvalidInput(format!(
                "'{}' is the group by column and cannot be aggregated",
                field
            )))
        } else {
            Err(SummaryError::MissingColumn(field.to_string()))
        }
    }

    fn row_mut(&mut self, idx: usize) -> Result<&mut AggregateField, SummaryError> {
        self.agg_fields
            .get_mut(idx)
            .ok_or_else(|| SummaryError::InvalidInput(format!("no aggregation row {}", idx + 1)))
    }
}
