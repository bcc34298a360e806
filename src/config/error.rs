//! Configuration error types.

use thiserror::Error;

/// Failure to load or deserialize configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Semantic validation failure of a loaded configuration value.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Invalid configuration for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
