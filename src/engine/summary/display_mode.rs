use std::fmt;
use std::str::FromStr;

use crate::engine::errors::SummaryError;

/// Controls capping and which rollup rows are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Top-N rows, then Top-N Totals, Remaining and Grand Totals
    #[default]
    Some,
    /// Every group, then Grand Totals
    All,
    /// Every group, no rollup rows
    None,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Some => "some",
            DisplayMode::All => "all",
            DisplayMode::None => "none",
        }
    }

    pub fn caps_top_n(&self) -> bool {
        matches!(self, DisplayMode::Some)
    }

    pub fn adds_grand_totals(&self) -> bool {
        matches!(self, DisplayMode::Some | DisplayMode::All)
    }

    pub fn adds_top_and_remaining(&self) -> bool {
        matches!(self, DisplayMode::Some)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "some" | "normal" | "" => Ok(DisplayMode::Some),
            "all" => Ok(DisplayMode::All),
            "none" => Ok(DisplayMode::None),
            _ => Err(SummaryError::InvalidInput(format!(
                "unknown display mode '{}' (expected some, all or none)",
                s
            ))),
        }
    }
}
