mod loader;

#[cfg(test)]
mod table_test;

use std::collections::HashSet;

use crate::engine::errors::TableError;
use crate::engine::types::{LogicalType, ScalarValue};

/// Rectangular in-memory dataset. Every record holds one value per column and
/// each column carries a single inferred `LogicalType`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    types: Vec<LogicalType>,
    rows: Vec<Vec<ScalarValue>>,
}

impl Table {
    /// Builds a table from already parsed values. Column types are unified
    /// across all records and every value is coerced to its column's type.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<ScalarValue>>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        let mut types = vec![LogicalType::Null; columns.len()];
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::RaggedRow {
                    row: idx as u64 + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            for (ty, value) in types.iter_mut().zip(row) {
                *ty = ty.unify(value.logical_type());
            }
        }

        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&types)
                    .map(|(value, ty)| value.coerce(*ty))
                    .collect()
            })
            .collect();

        Ok(Self {
            columns,
            types,
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column_type(&self, idx: usize) -> LogicalType {
        self.types.get(idx).copied().unwrap_or(LogicalType::Null)
    }

    pub fn rows(&self) -> &[Vec<ScalarValue>] {
        &self.rows
    }

    #[inline]
    pub fn value(&self, row: usize, column: usize) -> &ScalarValue {
        &self.rows[row][column]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` records, used for previews.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            types: self.types.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
