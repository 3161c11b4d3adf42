//! Required-parameter checks for inbound requests.

use crate::{Error, Result};
use std::collections::HashMap;

/// Check that every name in `required` is present in `source`.
///
/// Fails on the first missing name with an error reading
/// `"<message>: <name>"`, which the error mapping turns into a 400
/// response. Call this before reading any of the named fields.
pub fn require_params(required: &[&str], source: &HashMap<String, String>, message: &str) -> Result<()> {
    for name in required {
        if !source.contains_key(*name) {
            return Err(Error::MissingParameter(format!("{}: {}", message, name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = require_params(&["url"], &HashMap::new(), "Missing required parameter").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: url");
    }

    #[test]
    fn test_all_present() {
        let mut source = HashMap::new();
        source.insert("url".to_string(), "https://example.com".to_string());
        assert!(require_params(&["url"], &source, "Missing required parameter").is_ok());
    }

    #[test]
    fn test_first_missing_is_reported() {
        let mut source = HashMap::new();
        source.insert("second".to_string(), "x".to_string());
        let err = require_params(&["first", "second"], &source, "Missing required parameter").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: first");
    }

    #[test]
    fn test_empty_value_still_counts_as_present() {
        let mut source = HashMap::new();
        source.insert("url".to_string(), String::new());
        assert!(require_params(&["url"], &source, "Missing required parameter").is_ok());
    }
}
