use std::collections::HashSet;

use crate::engine::errors::SummaryError;
use crate::engine::summary::aggregate::ops::{fold, fold_column};
use crate::engine::summary::aggregate::plan::{AggKind, ResolvedField};
use crate::engine::summary::empty_fields::EmptyFieldSet;
use crate::engine::summary::group_key::GroupValue;
use crate::engine::summary::result::{RowKind, SummaryRow};
use crate::engine::table::Table;
use crate::engine::types::ScalarValue;

pub const GRAND_TOTALS_LABEL: &str = "Grand Totals";

pub fn top_totals_label(top_n: usize) -> String {
    format!("Top {} Totals", top_n)
}

pub fn remaining_label(remaining_groups: usize, group_by: &str) -> String {
    format!("Other {} {}", remaining_groups, capitalize(group_by))
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Rollup over the already aggregated top rows. `sum` and `nunique` fields
/// are summed; nunique therefore counts per-group distinct values, not
/// distinct values across the top groups.
pub fn top_totals_row(
    top_rows: &[SummaryRow],
    fields: &[ResolvedField],
    empty: &EmptyFieldSet,
    top_n: usize,
) -> Result<SummaryRow, SummaryError> {
    let mut values = Vec::with_capacity(fields.len() + 1);
    values.push(ScalarValue::Utf8(top_totals_label(top_n)));
    for (i, f) in fields.iter().enumerate() {
        let value = if empty.contains(&f.name) {
            ScalarValue::Null
        } else {
            match f.kind {
                AggKind::Sum | AggKind::NUnique => {
                    fold_column(f, AggKind::Sum, top_rows.iter().map(|r| &r.values[i + 1]))?
                }
                _ => ScalarValue::Null,
            }
        };
        values.push(value);
    }
    Ok(SummaryRow {
        kind: RowKind::TopTotals,
        values,
    })
}

/// Aggregates every record whose group key is not among `selected`. Records
/// with a null key always belong here but are not counted as a group.
pub fn remaining_row(
    table: &Table,
    group_column: usize,
    group_by: &str,
    selected: &HashSet<GroupValue>,
    fields: &[ResolvedField],
    empty: &EmptyFieldSet,
) -> Result<SummaryRow, SummaryError> {
    let remaining: Vec<&Vec<ScalarValue>> = table
        .rows()
        .iter()
        .filter(|row| match GroupValue::from_scalar(&row[group_column]) {
            Some(key) => !selected.contains(&key),
            None => true,
        })
        .collect();

    let remaining_groups = fold(
        group_by,
        AggKind::NUnique,
        remaining.iter().map(|row| &row[group_column]),
    )?;
    let remaining_groups = remaining_groups.as_i64().unwrap_or(0) as usize;

    let mut values = Vec::with_capacity(fields.len() + 1);
    values.push(ScalarValue::Utf8(remaining_label(remaining_groups, group_by)));
    for f in fields {
        let value = if empty.contains(&f.name) {
            ScalarValue::Null
        } else {
            fold_column(f, f.kind, remaining.iter().map(|row| &row[f.column]))?
        };
        values.push(value);
    }
    Ok(SummaryRow {
        kind: RowKind::Remaining,
        values,
    })
}

/// Totals over the entire table. `count` and `nunique` fields both report the
/// distinct non-null count of the column.
pub fn grand_totals_row(
    table: &Table,
    fields: &[ResolvedField],
    empty: &EmptyFieldSet,
) -> Result<SummaryRow, SummaryError> {
    let mut values = Vec::with_capacity(fields.len() + 1);
    values.push(ScalarValue::Utf8(GRAND_TOTALS_LABEL.to_string()));
    for f in fields {
        let column = table.rows().iter().map(|row| &row[f.column]);
        let value = if empty.contains(&f.name) {
            ScalarValue::Null
        } else {
            match f.kind {
                AggKind::Sum => fold_column(f, AggKind::Sum, column)?,
                AggKind::NUnique | AggKind::Count => fold_column(f, AggKind::NUnique, column)?,
                _ => ScalarValue::Null,
            }
        };
        values.push(value);
    }
    Ok(SummaryRow {
        kind: RowKind::GrandTotals,
        values,
    })
}
