use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use super::Table;
use crate::engine::errors::TableError;
use crate::engine::types::{LogicalType, ScalarValue};

impl Table {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_csv_reader(BufReader::new(file))?;
        debug!(
            target: "topn_summary::table",
            path = %path.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "Loaded CSV table"
        );
        Ok(table)
    }

    /// Parses comma separated input with a header row.
    ///
    /// Cells are inferred per value first; a column keeps a numeric type only
    /// when every non-null cell is numeric, otherwise the original cell text
    /// is kept for the whole column.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            // Headers are read manually so row numbers stay consistent in errors.
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut record = StringRecord::new();
        let has_header = csv_reader
            .read_record(&mut record)
            .map_err(|e| map_csv_error(e, 1))?;
        if !has_header {
            return Err(TableError::EmptyInput);
        }
        let columns: Vec<String> = record.iter().map(str::to_string).collect();

        let mut raw_rows: Vec<Vec<String>> = Vec::new();
        let mut row_number: u64 = 1;
        loop {
            row_number += 1;
            let more = csv_reader
                .read_record(&mut record)
                .map_err(|e| map_csv_error(e, row_number))?;
            if !more {
                break;
            }
            if record.len() != columns.len() {
                return Err(TableError::RaggedRow {
                    row: row_number,
                    expected: columns.len(),
                    found: record.len(),
                });
            }
            raw_rows.push(record.iter().map(str::to_string).collect());
        }

        let mut types = vec![LogicalType::Null; columns.len()];
        for row in &raw_rows {
            for (ty, cell) in types.iter_mut().zip(row) {
                *ty = ty.unify(ScalarValue::infer(cell).logical_type());
            }
        }

        let rows = raw_rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&types)
                    .map(|(cell, ty)| match (ScalarValue::infer(&cell), ty) {
                        (ScalarValue::Null, _) => ScalarValue::Null,
                        (_, LogicalType::String) => ScalarValue::Utf8(cell),
                        (value, ty) => value.coerce(*ty),
                    })
                    .collect()
            })
            .collect();

        Table::new(columns, rows)
    }
}

fn map_csv_error(err: csv::Error, fallback_row: u64) -> TableError {
    let reason = err.to_string();
    let pos = err.position().cloned();

    match err.into_kind() {
        csv::ErrorKind::Io(e) => TableError::Io(e),
        _ => {
            let row = pos
                .map(|p| p.record() + 1)
                .filter(|r| *r > 1)
                .unwrap_or(fallback_row);
            TableError::Parse { row, reason }
        }
    }
}
