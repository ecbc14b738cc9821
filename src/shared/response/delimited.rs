use std::io::Write;

use crate::shared::response::render::{Grid, Renderer};

pub struct CsvRenderer;

/// Header row, then one record per row; blanks become empty cells.
pub fn write_csv<W: Write>(grid: &Grid<'_>, out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(grid.columns)?;
    let mut record: Vec<String> = Vec::with_capacity(grid.columns.len());
    for row in &grid.rows {
        record.clear();
        record.extend(row.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

impl Renderer for CsvRenderer {
    fn render(&self, grid: &Grid<'_>) -> Vec<u8> {
        let mut buf = Vec::new();
        if let Err(e) = write_csv(grid, &mut buf) {
            tracing::error!("Failed to encode CSV: {}", e);
            buf.clear();
        }
        buf
    }
}
