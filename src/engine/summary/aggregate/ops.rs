use std::collections::HashSet;

use crate::engine::errors::SummaryError;
use crate::engine::summary::aggregate::plan::{AggKind, ResolvedField};
use crate::engine::summary::group_key::GroupValue;
use crate::engine::types::{LogicalType, ScalarValue};

/// Aggregator enum with concrete implementations per kind
#[derive(Debug, Clone, PartialEq)]
pub enum AggregatorImpl {
    First(First),
    Sum(Sum),
    Mean(Mean),
    Count(Count),
    Max(Extreme),
    Min(Extreme),
    NUnique(NUnique),
}

impl AggregatorImpl {
    pub fn from_kind(field: &str, kind: AggKind) -> Self {
        match kind {
            AggKind::First => Self::First(First::new()),
            AggKind::Sum => Self::Sum(Sum::new(field.to_string())),
            AggKind::Mean => Self::Mean(Mean::new(field.to_string())),
            AggKind::Count => Self::Count(Count::new()),
            AggKind::Max => Self::Max(Extreme::max()),
            AggKind::Min => Self::Min(Extreme::min()),
            AggKind::NUnique => Self::NUnique(NUnique::new()),
        }
    }

    /// Aggregator over a resolved column. Sums over a `Float` column start as
    /// floats, so an empty input still yields `0.0`.
    pub fn for_column(field: &ResolvedField, kind: AggKind) -> Self {
        match (kind, field.ty) {
            (AggKind::Sum, LogicalType::Float) => Self::Sum(Sum::float(field.name.clone())),
            _ => Self::from_kind(&field.name, kind),
        }
    }

    /// Update aggregator with the field value of one record
    pub fn update(&mut self, value: &ScalarValue) -> Result<(), SummaryError> {
        match self {
            AggregatorImpl::First(a) => a.update(value),
            AggregatorImpl::Sum(a) => a.update(value)?,
            AggregatorImpl::Mean(a) => a.update(value)?,
            AggregatorImpl::Count(a) => a.update(),
            AggregatorImpl::Max(a) => a.update(value),
            AggregatorImpl::Min(a) => a.update(value),
            AggregatorImpl::NUnique(a) => a.update(value),
        }
        Ok(())
    }

    pub fn finalize(&self) -> ScalarValue {
        match self {
            AggregatorImpl::First(a) => a.finalize(),
            AggregatorImpl::Sum(a) => a.finalize(),
            AggregatorImpl::Mean(a) => a.finalize(),
            AggregatorImpl::Count(a) => a.finalize(),
            AggregatorImpl::Max(a) => a.finalize(),
            AggregatorImpl::Min(a) => a.finalize(),
            AggregatorImpl::NUnique(a) => a.finalize(),
        }
    }
}

/// Folds `values` with a fresh aggregator of `kind`.
pub fn fold<'a, I>(field: &str, kind: AggKind, values: I) -> Result<ScalarValue, SummaryError>
where
    I: IntoIterator<Item = &'a ScalarValue>,
{
    run(AggregatorImpl::from_kind(field, kind), values)
}

/// Like `fold`, but typed by the resolved column.
pub fn fold_column<'a, I>(
    field: &ResolvedField,
    kind: AggKind,
    values: I,
) -> Result<ScalarValue, SummaryError>
where
    I: IntoIterator<Item = &'a ScalarValue>,
{
    run(AggregatorImpl::for_column(field, kind), values)
}

fn run<'a, I>(mut agg: AggregatorImpl, values: I) -> Result<ScalarValue, SummaryError>
where
    I: IntoIterator<Item = &'a ScalarValue>,
{
    for v in values {
        agg.update(v)?;
    }
    Ok(agg.finalize())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct First {
    value: Option<ScalarValue>,
}

impl First {
    pub fn new() -> Self {
        Self { value: None }
    }

    #[inline]
    pub fn update(&mut self, value: &ScalarValue) {
        if self.value.is_none() {
            self.value = Some(value.clone());
        }
    }

    pub fn finalize(&self) -> ScalarValue {
        self.value.clone().unwrap_or(ScalarValue::Null)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sum {
    pub field: String,
    int_sum: i64,
    float_sum: f64,
    // Switches to float accumulation on the first float or on i64 overflow
    is_float: bool,
}

impl Sum {
    pub fn new(field: String) -> Self {
        Self {
            field,
            int_sum: 0,
            float_sum: 0.0,
            is_float: false,
        }
    }

    pub fn float(field: String) -> Self {
        Self {
            is_float: true,
            ..Self::new(field)
        }
    }

    pub fn update(&mut self, value: &ScalarValue) -> Result<(), SummaryError> {
        match value {
            ScalarValue::Null => {}
            ScalarValue::Int64(i) if !self.is_float => match self.int_sum.checked_add(*i) {
                Some(s) => self.int_sum = s,
                None => {
                    self.promote();
                    self.float_sum += *i as f64;
                }
            },
            ScalarValue::Int64(i) => self.float_sum += *i as f64,
            ScalarValue::Float64(f) => {
                self.promote();
                self.float_sum += f;
            }
            ScalarValue::Utf8(s) => return Err(non_numeric("sum", &self.field, s)),
        }
        Ok(())
    }

    fn promote(&mut self) {
        if !self.is_float {
            self.is_float = true;
            self.float_sum = self.int_sum as f64;
        }
    }

    pub fn finalize(&self) -> ScalarValue {
        if self.is_float {
            ScalarValue::Float64(self.float_sum)
        } else {
            ScalarValue::Int64(self.int_sum)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mean {
    pub field: String,
    sum: f64,
    count: u64,
}

impl Mean {
    pub fn new(field: String) -> Self {
        Self {
            field,
            sum: 0.0,
            count: 0,
        }
    }

    pub fn update(&mut self, value: &ScalarValue) -> Result<(), SummaryError> {
        match value {
            ScalarValue::Null => {}
            ScalarValue::Utf8(s) => return Err(non_numeric("mean", &self.field, s)),
            other => {
                if let Some(v) = other.as_f64() {
                    self.sum += v;
                    self.count += 1;
                }
            }
        }
        Ok(())
    }

    pub fn finalize(&self) -> ScalarValue {
        if self.count == 0 {
            ScalarValue::Null
        } else {
            ScalarValue::Float64(self.sum / self.count as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Count {
    count: i64,
}

impl Count {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    #[inline]
    pub fn update(&mut self) {
        self.count += 1;
    }

    pub fn finalize(&self) -> ScalarValue {
        ScalarValue::Int64(self.count)
    }
}

/// Shared state for MAX and MIN; `keep_greater` selects the direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    keep_greater: bool,
    current: Option<ScalarValue>,
}

impl Extreme {
    pub fn max() -> Self {
        Self {
            keep_greater: true,
            current: None,
        }
    }

    pub fn min() -> Self {
        Self {
            keep_greater: false,
            current: None,
        }
    }

    pub fn update(&mut self, value: &ScalarValue) {
        if value.is_null() {
            return;
        }
        let replace = match &self.current {
            None => true,
            Some(cur) => {
                let ord = value.compare(cur);
                if self.keep_greater {
                    ord.is_gt()
                } else {
                    ord.is_lt()
                }
            }
        };
        if replace {
            self.current = Some(value.clone());
        }
    }

    pub fn finalize(&self) -> ScalarValue {
        self.current.clone().unwrap_or(ScalarValue::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NUnique {
    uniq: HashSet<GroupValue>,
}

impl NUnique {
    pub fn new() -> Self {
        Self {
            uniq: HashSet::new(),
        }
    }

    pub fn update(&mut self, value: &ScalarValue) {
        if let Some(key) = GroupValue::from_scalar(value) {
            self.uniq.insert(key);
        }
    }

    pub fn finalize(&self) -> ScalarValue {
        ScalarValue::Int64(self.uniq.len() as i64)
    }
}

fn non_numeric(op: &str, field: &str, value: &str) -> SummaryError {
    SummaryError::InvalidAggregation(format!(
        "cannot compute {} over non-numeric value '{}' in column '{}'",
        op, value, field
    ))
}
