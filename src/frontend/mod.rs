pub mod cli;
pub mod form;

pub use cli::{Args, check_config, run};
pub use form::AnalysisForm;

#[cfg(test)]
mod form_test;
