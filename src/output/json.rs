//! JSON output formatting for dawdle.

use serde::Serialize;
use serde_json::json;

use crate::error::DawdleError;

/// Format the excuse list as JSON
///
/// # Errors
///
/// Returns `DawdleError::Json` if JSON serialization fails.
pub fn format_excuses_json(excuses: &[&str]) -> Result<String, DawdleError> {
    let output = json!({
        "count": excuses.len(),
        "excuses": excuses
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `DawdleError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DawdleError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_excuses_json() {
        let output = format_excuses_json(&["Coffee first, productivity later."]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["excuses"][0], "Coffee first, productivity later.");
    }
}
