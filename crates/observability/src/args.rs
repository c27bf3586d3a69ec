//! CLI arguments for logging.

use clap::Args;
use serde::{Deserialize, Serialize};

/// Log output format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Terminal,
    /// One JSON object per event.
    Json,
}

/// Logging CLI arguments.
#[derive(Debug, Args, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "Logging")]
#[serde(default)]
pub struct LogArgs {
    /// Default filter directive, overridden by `RUST_LOG`
    #[arg(long = "log.filter", default_value = "info")]
    pub filter: String,

    /// Output format
    #[arg(long = "log.format", value_enum, default_value_t = LogFormat::Terminal)]
    pub format: LogFormat,

    /// Colorize terminal output
    #[arg(long = "log.color", default_value_t = true, action = clap::ArgAction::Set)]
    pub color: bool,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Terminal,
            color: true,
        }
    }
}
