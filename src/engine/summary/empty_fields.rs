use std::collections::HashSet;

use crate::engine::errors::SummaryError;
use crate::engine::summary::aggregate::plan::{AggKind, AggregationSpec};

/// Fields the caller wants blanked in rollup rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EmptyFields {
    #[default]
    NoneProvided,
    Single(String),
    Many(Vec<String>),
}

impl EmptyFields {
    /// Picks the variant matching the number of names given.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        match names.len() {
            0 => EmptyFields::NoneProvided,
            1 => EmptyFields::Single(names.remove(0)),
            _ => EmptyFields::Many(names),
        }
    }

    /// Validates the names and adds every `first` field of `spec`. Names that
    /// are not aggregation fields are dropped so they never add columns.
    pub fn normalize(&self, spec: &AggregationSpec) -> Result<EmptyFieldSet, SummaryError> {
        let provided: &[String] = match self {
            EmptyFields::NoneProvided => &[],
            EmptyFields::Single(name) => std::slice::from_ref(name),
            EmptyFields::Many(names) => names,
        };

        let mut set = HashSet::with_capacity(provided.len() + spec.len());
        for name in provided {
            if name.trim().is_empty() {
                return Err(SummaryError::InvalidInput(
                    "empty field names must not be blank".to_string(),
                ));
            }
            if spec.kind_of(name).is_some() {
                set.insert(name.clone());
            }
        }
        for f in spec.fields() {
            if f.kind == AggKind::First {
                set.insert(f.field.clone());
            }
        }
        Ok(EmptyFieldSet(set))
    }
}

/// Normalized, deduplicated set of blanked fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyFieldSet(HashSet<String>);

impl EmptyFieldSet {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
