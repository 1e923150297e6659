//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

use crate::provider::ProviderError;

/// Main error type for tokenomics operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter was not supplied
    #[error("Missing required parameter `{field}`")]
    MissingField { field: &'static str },

    /// A parameter was supplied with an out-of-range or non-finite value
    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Market data lookup or decoding failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a missing-field error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid-parameter error naming the offending field
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Name of the parameter this error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_field() {
        let err = Error::invalid("team_allocation", "must be between 0 and 100, got 140");
        assert_eq!(err.field(), Some("team_allocation"));
        assert_eq!(
            err.to_string(),
            "Invalid parameter `team_allocation`: must be between 0 and 100, got 140"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err = Error::missing("burn_rate");
        assert_eq!(err.field(), Some("burn_rate"));
        assert!(err.to_string().contains("burn_rate"));
    }

    #[test]
    fn test_configuration_has_no_field() {
        let err = Error::Configuration("bad ruleset".into());
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Configuration error: bad ruleset");
    }
}
