//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::DawdleError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or formatting fails.
pub fn config(
    paths: &Paths,
    config: &Config,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, DawdleError> {
    match cmd {
        ConfigCommands::Show => format_config(config, format),
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "config_file": paths.config_file,
                "exists": paths.config_file.exists(),
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },
        ConfigCommands::Init { force } => init(paths, force),
    }
}

fn init(paths: &Paths, force: bool) -> Result<String, DawdleError> {
    if paths.config_file.exists() && !force {
        return Err(DawdleError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    if let Some(parent) = paths.config_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save_to_path(&paths.config_file)?;

    Ok(format!(
        "{} {}",
        "Wrote".green(),
        paths.config_file.display()
    ))
}
