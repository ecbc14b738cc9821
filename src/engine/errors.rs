use std::io;
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur while building a summary table.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Invalid aggregation: {0}")]
    InvalidAggregation(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SummaryError {
    pub fn log_error(&self) {
        match self {
            SummaryError::InvalidInput(e) => {
                error!("Invalid input: {}", e);
                debug!("Invalid input details: {:?}", e);
            }
            SummaryError::MissingColumn(e) => {
                error!("Column not found: {}", e);
                debug!("Missing column details: {:?}", e);
            }
            SummaryError::InvalidAggregation(e) => {
                error!("Invalid aggregation: {}", e);
                debug!("Invalid aggregation details: {:?}", e);
            }
            SummaryError::Io(e) => {
                error!("Summary output could not be written: {}", e);
                debug!("I/O error details: {:?}", e);
            }
            SummaryError::Csv(e) => {
                error!("CSV encoding failed: {}", e);
                debug!("CSV error details: {:?}", e);
            }
        }
    }
}

/// Errors raised while loading or constructing a `Table`.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV input is empty")]
    EmptyInput,

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV parse error at row {row}: {reason}")]
    Parse { row: u64, reason: String },
}
