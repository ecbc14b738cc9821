use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::engine::errors::SummaryError;
use crate::engine::summary::aggregate::ops::AggregatorImpl;
use crate::engine::summary::aggregate::plan::ResolvedField;
use crate::engine::summary::group_key::{GroupValue, bucket_rows};
use crate::engine::summary::request::SummaryRequest;
use crate::engine::summary::result::{RowKind, SummaryRow, SummaryTable};
use crate::engine::summary::rollup::{grand_totals_row, remaining_row, top_totals_row};
use crate::engine::summary::writer::write_summary_csv;
use crate::engine::table::Table;
use crate::engine::types::ScalarValue;
use crate::shared::config::CONFIG;

/// Builds top-N summaries and persists them under a results directory.
#[derive(Debug, Clone)]
pub struct Summarizer {
    results_dir: PathBuf,
}

impl Summarizer {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(&CONFIG.output.results_dir)
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Computes the summary and writes it as CSV. Nothing is written when the
    /// computation fails.
    pub fn summarize(
        &self,
        table: &Table,
        request: &SummaryRequest,
    ) -> Result<SummaryTable, SummaryError> {
        let summary = Self::compute(table, request)?;
        write_summary_csv(&summary, &self.results_dir, &request.csv_filename)?;
        Ok(summary)
    }

    /// Pure part of `summarize`: no filesystem access.
    pub fn compute(table: &Table, request: &SummaryRequest) -> Result<SummaryTable, SummaryError> {
        let group_column = table
            .column_index(&request.group_by)
            .ok_or_else(|| SummaryError::MissingColumn(request.group_by.clone()))?;
        let spec = request.aggregations.without(&request.group_by);
        let fields = spec.resolve(table)?;
        let sort_position = sort_position(request, &fields)?;
        let empty = request.empty_fields.normalize(&spec)?;

        let mode = request.display_mode;
        if mode.caps_top_n() && request.top_n == 0 {
            return Err(SummaryError::InvalidInput(
                "top N must be at least 1".to_string(),
            ));
        }

        let buckets = bucket_rows(table, group_column);
        debug!(
            target: "topn_summary::summarizer",
            groups = buckets.len(),
            records = table.len(),
            fields = fields.len(),
            "Grouped records"
        );

        let mut group_rows = Vec::with_capacity(buckets.len());
        for rows in buckets.values() {
            group_rows.push(aggregate_group(table, group_column, rows, &fields)?);
        }

        // Vec::sort_by is stable: ties keep first-seen group order
        group_rows.sort_by(|a, b| descending(&a.values[sort_position], &b.values[sort_position]));
        if mode.caps_top_n() {
            group_rows.truncate(request.top_n);
        }

        let mut rows = group_rows;
        if mode.adds_top_and_remaining() {
            let selected: HashSet<GroupValue> = rows
                .iter()
                .filter_map(|r| GroupValue::from_scalar(r.label()))
                .collect();
            let top = top_totals_row(&rows, &fields, &empty, request.top_n)?;
            let remaining = remaining_row(
                table,
                group_column,
                &request.group_by,
                &selected,
                &fields,
                &empty,
            )?;
            rows.push(top);
            rows.push(remaining);
        }
        if mode.adds_grand_totals() {
            rows.push(grand_totals_row(table, &fields, &empty)?);
        }

        let mut columns = Vec::with_capacity(fields.len() + 1);
        columns.push(request.group_by.clone());
        columns.extend(fields.iter().map(|f| f.name.clone()));

        info!(
            target: "topn_summary::summarizer",
            mode = %mode,
            rows = rows.len(),
            "Summary computed"
        );
        Ok(SummaryTable::new(columns, rows))
    }
}

/// Computes the summary with the configured results directory and writes it.
pub fn summarize(table: &Table, request: &SummaryRequest) -> Result<SummaryTable, SummaryError> {
    Summarizer::from_config().summarize(table, request)
}

/// Position of the sort column within a summary row (0 is the grouping column).
fn sort_position(request: &SummaryRequest, fields: &[ResolvedField]) -> Result<usize, SummaryError> {
    if request.sort_by == request.group_by {
        return Ok(0);
    }
    fields
        .iter()
        .position(|f| f.name == request.sort_by)
        .map(|i| i + 1)
        .ok_or_else(|| SummaryError::MissingColumn(request.sort_by.clone()))
}

/// Second pass of the grouping: folds every field over one bucket.
fn aggregate_group(
    table: &Table,
    group_column: usize,
    rows: &[usize],
    fields: &[ResolvedField],
) -> Result<SummaryRow, SummaryError> {
    let mut values = Vec::with_capacity(fields.len() + 1);
    values.push(table.value(rows[0], group_column).clone());
    for f in fields {
        let mut agg = AggregatorImpl::for_column(f, f.kind);
        for &r in rows {
            agg.update(table.value(r, f.column))?;
        }
        values.push(agg.finalize());
    }
    Ok(SummaryRow {
        kind: RowKind::Group,
        values,
    })
}

/// Descending natural order with nulls last.
fn descending(a: &ScalarValue, b: &ScalarValue) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.compare(a),
    }
}
