//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject prefixes that would break the one-line-per-entry shape
//! - Reject file sinks without a path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NotepadConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use crate::config::schema::{NotepadConfig, SinkTarget};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("prefix must not contain line breaks")]
    PrefixLineBreak,

    #[error("{sink} sink file path is empty")]
    EmptySinkPath { sink: &'static str },
}

/// Validate `config`, collecting every problem found.
pub fn validate_config(config: &NotepadConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.prefix.contains(['\n', '\r']) {
        errors.push(ValidationError::PrefixLineBreak);
    }
    for (sink, target) in [("primary", &config.primary), ("secondary", &config.secondary)] {
        if let SinkTarget::File(path) = target {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::EmptySinkPath { sink });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&NotepadConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = NotepadConfig::default();
        config.prefix = "multi\nline".to_string();
        config.secondary = SinkTarget::File(PathBuf::new());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::PrefixLineBreak,
                ValidationError::EmptySinkPath { sink: "secondary" },
            ]
        );
        assert_eq!(errors[1].to_string(), "secondary sink file path is empty");
    }
}
