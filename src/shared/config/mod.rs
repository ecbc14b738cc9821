mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{
    LoggingConfig, OutputConfig, Settings, SummaryDefaults, config_path, load_settings,
    load_settings_from,
};
