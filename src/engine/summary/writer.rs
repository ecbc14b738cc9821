use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::engine::errors::SummaryError;
use crate::engine::summary::result::SummaryTable;
use crate::shared::path::results_path;
use crate::shared::response::Grid;
use crate::shared::response::delimited::write_csv;

/// Encodes `summary` as CSV: header row, no index column, blanks as empty cells.
pub fn encode_csv<W: Write>(summary: &SummaryTable, out: W) -> Result<(), SummaryError> {
    write_csv(&Grid::from(summary), out)?;
    Ok(())
}

/// Writes `summary` to `<results_dir>/<filename>`, creating the directory and
/// overwriting any previous file.
pub fn write_summary_csv(
    summary: &SummaryTable,
    results_dir: &Path,
    filename: &str,
) -> Result<PathBuf, SummaryError> {
    fs::create_dir_all(results_dir)?;
    let path = results_path(results_dir, filename);
    let file = fs::File::create(&path)?;
    encode_csv(summary, std::io::BufWriter::new(file))?;
    info!(
        target: "topn_summary::writer",
        path = %path.display(),
        rows = summary.len(),
        "Summary written"
    );
    Ok(path)
}
