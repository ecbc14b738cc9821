use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use crate::engine::errors::SummaryError;
use crate::engine::summary::{AggregateField, DisplayMode, SummaryTable, Summarizer};
use crate::engine::table::Table;
use crate::frontend::form::AnalysisForm;
use crate::shared::config::{CONFIG, config_path, load_settings_from};
use crate::shared::path::absolutize;
use crate::shared::response::{Grid, OutputFormat, Renderer, TextRenderer};

#[derive(Parser, Debug, Clone)]
#[command(name = "topn_summary")]
#[command(about = "Group a CSV file and print a top-N summary with totals", long_about = None)]
pub struct Args {
    /// CSV file to summarize (comma delimited, header row, UTF-8)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column whose distinct values form the groups
    #[arg(short, long)]
    pub group_by: String,

    /// Aggregation written as FIELD:KIND, KIND one of
    /// first, sum, mean, count, max, min, nunique. Repeat for more fields.
    #[arg(short, long = "agg", value_name = "FIELD:KIND")]
    pub aggs: Vec<AggregateField>,

    /// Column to sort groups by (descending). Defaults to the first aggregation field
    #[arg(short, long)]
    pub sort_by: Option<String>,

    /// Number of groups to keep in "some" mode
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Display mode: some, all or none
    #[arg(short, long)]
    pub mode: Option<DisplayMode>,

    /// File name of the CSV written into the results directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Field to leave blank in rollup rows. Repeatable
    #[arg(long = "empty-field", value_name = "FIELD")]
    pub empty_fields: Vec<String>,

    /// How the summary is printed: table, html, csv or json
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Print the first N input rows before the summary (0 = no preview)
    #[arg(long, default_value = "0")]
    pub preview: usize,

    /// Overrides the configured results directory
    #[arg(long)]
    pub results_dir: Option<PathBuf>,
}

/// Loads the settings from the configured file and environment. `CONFIG`
/// panics on bad settings, so the binary calls this before touching it.
pub fn check_config() -> anyhow::Result<()> {
    check_config_at(&config_path())
}

pub fn check_config_at(path: &str) -> anyhow::Result<()> {
    load_settings_from(path).with_context(|| format!("invalid configuration in '{}'", path))?;
    Ok(())
}

/// Loads the input, runs the summary and prints it to stdout.
pub fn run(args: &Args) -> anyhow::Result<SummaryTable> {
    let table = Table::from_csv_path(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!(
        input = %args.input.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Input loaded"
    );

    let mut stdout = io::stdout().lock();
    if args.preview > 0 {
        let preview = table.head(args.preview);
        stdout.write_all(&TextRenderer.render(&Grid::from(&preview)))?;
        stdout.write_all(b"\n")?;
    }

    let form = build_form(args, &table)?;
    let request = form.to_request()?;
    let summarizer = match &args.results_dir {
        Some(dir) => Summarizer::new(dir),
        None => Summarizer::from_config(),
    };

    let summary = summarizer.summarize(&table, &request).inspect_err(|e| e.log_error())?;

    let rendered = args.format.renderer().render(&Grid::from(&summary));
    stdout.write_all(&rendered)?;
    stdout.flush()?;

    info!(
        output = %absolutize(summarizer.results_dir().join(&request.csv_filename)).display(),
        format = %args.format,
        "Summary saved"
    );
    Ok(summary)
}

/// Fills a form from the command line, falling back to configured defaults.
pub fn build_form(args: &Args, table: &Table) -> Result<AnalysisForm, SummaryError> {
    let defaults = &CONFIG.summary;

    let mut form = AnalysisForm::new(table.columns().to_vec());
    form.select_group_by(&args.group_by)?;
    for agg in &args.aggs {
        if agg.field == args.group_by {
            warn!(field = %agg.field, "Ignoring aggregation on the group by column");
            continue;
        }
        form.push_field(agg.clone())?;
    }

    form.sort_by = args.sort_by.clone();
    form.top_n = args.top_n.unwrap_or(defaults.top_n);
    form.display_mode = match args.mode {
        Some(mode) => mode,
        None => defaults.display_mode.parse()?,
    };
    form.csv_filename = args
        .output
        .clone()
        .unwrap_or_else(|| defaults.csv_filename.clone());
    form.empty_fields = args.empty_fields.clone();
    Ok(form)
}
