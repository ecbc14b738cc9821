use std::fmt;
use std::str::FromStr;

use crate::engine::errors::SummaryError;
use crate::engine::table::Table;
use crate::engine::types::LogicalType;

/// Aggregation applied to one field of every group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggKind {
    /// Value from the first record of the group
    First,
    /// SUM over a numeric field
    Sum,
    /// AVG over a numeric field
    Mean,
    /// Number of records, nulls included
    Count,
    /// MAX by natural ordering
    Max,
    /// MIN by natural ordering
    Min,
    /// Number of distinct non-null values
    NUnique,
}

impl AggKind {
    pub const ALL: [AggKind; 7] = [
        AggKind::First,
        AggKind::Sum,
        AggKind::Mean,
        AggKind::Count,
        AggKind::Max,
        AggKind::Min,
        AggKind::NUnique,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggKind::First => "first",
            AggKind::Sum => "sum",
            AggKind::Mean => "mean",
            AggKind::Count => "count",
            AggKind::Max => "max",
            AggKind::Min => "min",
            AggKind::NUnique => "nunique",
        }
    }

    /// Kinds that only accept numeric columns.
    pub fn requires_numeric(&self) -> bool {
        matches!(self, AggKind::Sum | AggKind::Mean)
    }
}

impl fmt::Display for AggKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggKind {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        AggKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lowered)
            .ok_or_else(|| {
                SummaryError::InvalidAggregation(format!(
                    "unsupported aggregation kind '{}' (expected one of first, sum, mean, count, max, min, nunique)",
                    s
                ))
            })
    }
}

/// A single `(field, kind)` entry of an aggregation spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateField {
    pub field: String,
    pub kind: AggKind,
}

impl AggregateField {
    pub fn new(field: impl Into<String>, kind: AggKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// Parses `field:kind`. The last `:` separates the kind so field names may
/// contain colons.
impl FromStr for AggregateField {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, kind) = s.rsplit_once(':').ok_or_else(|| {
            SummaryError::InvalidInput(format!(
                "aggregation '{}' must be written as FIELD:KIND",
                s
            ))
        })?;
        if field.is_empty() {
            return Err(SummaryError::InvalidInput(format!(
                "aggregation '{}' has an empty field name",
                s
            )));
        }
        Ok(AggregateField::new(field, kind.parse()?))
    }
}

/// Ordered list of aggregations. Behaves like an insertion-ordered map: a
/// field added twice keeps its first position and takes the latest kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationSpec {
    fields: Vec<AggregateField>,
}

impl AggregationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, kind: AggKind) -> Self {
        self.push(field, kind);
        self
    }

    pub fn push(&mut self, field: impl Into<String>, kind: AggKind) {
        let field = field.into();
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.kind = kind,
            None => self.fields.push(AggregateField::new(field, kind)),
        }
    }

    pub fn fields(&self) -> &[AggregateField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn kind_of(&self, field: &str) -> Option<AggKind> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.kind)
    }

    /// Copy of the spec with the grouping column removed.
    pub fn without(&self, group_by: &str) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|f| f.field != group_by)
                .cloned()
                .collect(),
        }
    }

    /// Binds every field to its column in `table` and checks that numeric
    /// kinds are applied to numeric columns.
    pub fn resolve(&self, table: &Table) -> Result<Vec<ResolvedField>, SummaryError> {
        self.fields
            .iter()
            .map(|f| {
                let column = table
                    .column_index(&f.field)
                    .ok_or_else(|| SummaryError::MissingColumn(f.field.clone()))?;
                let ty = table.column_type(column);
                if f.kind.requires_numeric() && ty == LogicalType::String {
                    return Err(SummaryError::InvalidAggregation(format!(
                        "cannot compute {} over non-numeric column '{}'",
                        f.kind, f.field
                    )));
                }
                Ok(ResolvedField {
                    name: f.field.clone(),
                    column,
                    kind: f.kind,
                    ty,
                })
            })
            .collect()
    }
}

impl FromIterator<AggregateField> for AggregationSpec {
    fn from_iter<I: IntoIterator<Item = AggregateField>>(iter: I) -> Self {
        let mut spec = AggregationSpec::new();
        for f in iter {
            spec.push(f.field, f.kind);
        }
        spec
    }
}

/// Aggregation field bound to a table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub column: usize,
    pub kind: AggKind,
    pub ty: LogicalType,
}
