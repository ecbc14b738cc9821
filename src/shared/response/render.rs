use std::fmt;
use std::str::FromStr;

use crate::engine::errors::SummaryError;
use crate::engine::summary::SummaryTable;
use crate::engine::table::Table;
use crate::engine::types::ScalarValue;
use crate::shared::response::{CsvRenderer, HtmlRenderer, JsonRenderer, TextRenderer};

/// Borrowed rectangular view handed to renderers.
#[derive(Debug, Clone)]
pub struct Grid<'a> {
    pub columns: &'a [String],
    pub rows: Vec<&'a [ScalarValue]>,
}

impl<'a> From<&'a SummaryTable> for Grid<'a> {
    fn from(table: &'a SummaryTable) -> Self {
        Self {
            columns: table.columns(),
            rows: table.rows().iter().map(|r| r.values.as_slice()).collect(),
        }
    }
}

impl<'a> From<&'a Table> for Grid<'a> {
    fn from(table: &'a Table) -> Self {
        Self {
            columns: table.columns(),
            rows: table.rows().iter().map(|r| r.as_slice()).collect(),
        }
    }
}

/// A trait that defines how to serialize a table for a given consumer.
pub trait Renderer: Send + Sync {
    /// Render the whole grid to bytes.
    fn render(&self, grid: &Grid<'_>) -> Vec<u8>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Html,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Table => Box::new(TextRenderer),
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "html" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(SummaryError::InvalidInput(format!(
                "unknown output format '{}' (expected table, html, csv or json)",
                s
            ))),
        }
    }
}
