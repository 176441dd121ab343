//! CLI error types

use curve_builder::BuildError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Settings error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference-data store does not parse
    #[error("Store error: {0}")]
    Store(#[from] toml::de::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Validation found issues
    #[error("Validation of {configuration} found {issues} issue(s)")]
    ValidationFailed {
        /// Configuration validated
        configuration: String,
        /// Number of issues
        issues: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_converts() {
        let err: CliError = BuildError::configuration_not_found("USD-1").into();
        assert!(matches!(err, CliError::Build(_)));
        assert!(err.to_string().contains("USD-1"));
    }

    #[test]
    fn test_validation_failed_display() {
        let err = CliError::ValidationFailed {
            configuration: "USD-1".to_string(),
            issues: 3,
        };
        assert_eq!(err.to_string(), "Validation of USD-1 found 3 issue(s)");
    }
}
