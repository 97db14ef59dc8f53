//! Diagnostic tracing.
//!
//! - **Tracing (this module)**: developer diagnostics via `RUST_LOG`.
//! - **Session log (`timer::sink`)**: the timestamped events shown to the
//!   user. Always recorded, unaffected by `RUST_LOG`. Entries are mirrored
//!   into tracing under the `dawdle::session` target.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::DawdleError;

/// Where diagnostics go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Compact lines on stderr.
    Stderr,
    /// Appended to a file, for when the TUI owns the terminal.
    File(PathBuf),
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=dawdle=debug dawdle start 1
/// ```
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(target: LogTarget) -> Result<(), DawdleError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .compact(),
                )
                .init();
        }
    }

    Ok(())
}
