//! Command implementations for dawdle.

mod completions;
mod config;
mod start;

pub use completions::completions;
pub use config::config;
pub use start::{parse_line, start, LineInput};

use crate::cli::args::OutputFormat;
use crate::error::DawdleError;
use crate::output::format_excuses;
use crate::timer::EXCUSES;

/// Execute excuses command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn excuses(format: OutputFormat) -> Result<String, DawdleError> {
    format_excuses(EXCUSES, format)
}
