//! Output formatting for dawdle.
//!
//! Formatters for command output plus the line-mode presenter.

mod console;
mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::DawdleError;

pub use console::ConsolePresenter;
pub use json::*;
pub use pretty::*;

/// Format the excuse list based on output format
///
/// # Errors
///
/// Returns `DawdleError::Json` if JSON serialization fails.
pub fn format_excuses(excuses: &[&str], format: OutputFormat) -> Result<String, DawdleError> {
    match format {
        OutputFormat::Pretty => Ok(format_excuses_pretty(excuses)),
        OutputFormat::Json => format_excuses_json(excuses),
    }
}

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, DawdleError> {
    match format {
        OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?.trim_end().to_string()),
        OutputFormat::Json => to_json(config),
    }
}
