use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub summary: SummaryDefaults,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives every summary CSV
    pub results_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

/// Front-end defaults used when the caller leaves a form field unset
#[derive(Debug, Deserialize)]
pub struct SummaryDefaults {
    pub top_n: usize,
    pub display_mode: String,
    pub csv_filename: String,
}

use std::env;

pub const CONFIG_ENV: &str = "TOPN_SUMMARY_CONFIG";
pub const ENV_PREFIX: &str = "TOPN_SUMMARY";

/// Config file named by `TOPN_SUMMARY_CONFIG`, `config` otherwise.
pub fn config_path() -> String {
    env::var(CONFIG_ENV).unwrap_or_else(|_| "config".to_string())
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    load_settings_from(&config_path())
}

/// Defaults, then the optional file at `config_path`, then `TOPN_SUMMARY_*`
/// environment variables (`__` separates nested keys).
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("output.results_dir", "results")?
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("summary.top_n", 10)?
        .set_default("summary.display_mode", "some")?
        .set_default("summary.csv_filename", "analysis_result.csv")?
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
