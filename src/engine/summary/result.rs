use crate::engine::types::ScalarValue;

/// Origin of a summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Group,
    TopTotals,
    Remaining,
    GrandTotals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub kind: RowKind,
    /// Grouping value (or rollup label) first, then one value per aggregation field
    pub values: Vec<ScalarValue>,
}

impl SummaryRow {
    pub fn label(&self) -> &ScalarValue {
        &self.values[0]
    }
}

/// Output of a summarize run. Rollup rows hold `Null` where a value is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    columns: Vec<String>,
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<SummaryRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn group_rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().filter(|r| r.kind == RowKind::Group)
    }

    pub fn find(&self, kind: RowKind) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.kind == kind)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of `column` in the row at `row`.
    pub fn value(&self, row: usize, column: &str) -> Option<&ScalarValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| &r.values[col])
    }
}
