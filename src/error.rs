//! Error types for dawdle.
//!
//! The timer itself never fails: bad input is coerced and actions in the wrong
//! mode are ignored. These errors come from the shell around it (config
//! files, the terminal, serialization).

use thiserror::Error;

/// Errors surfaced by the dawdle binary.
#[derive(Debug, Error)]
pub enum DawdleError {
    /// Configuration could not be located, read, or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or input failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DawdleError::Config("missing home".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing home");

        let err = DawdleError::Terminal("raw mode".to_string());
        assert_eq!(err.to_string(), "Terminal error: raw mode");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DawdleError = io.into();
        assert!(matches!(err, DawdleError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
