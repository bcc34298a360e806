//! Record store configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Which `RecordStore` backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local JSON files under `data_dir`.
    #[default]
    File,
    /// Remote table store (PostgREST-style API).
    Rest,
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Data directory for the file backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// API root for the rest backend.
    #[serde(default)]
    pub rest_url: Option<String>,

    /// Service key for the rest backend.
    #[serde(default)]
    pub rest_api_key: Option<String>,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::Rest {
            if self.rest_url.as_deref().unwrap_or("").is_empty() {
                return Err(ValidationError::invalid(
                    "storage.rest_url",
                    "required when storage.backend is 'rest'",
                ));
            }
            if self.rest_api_key.as_deref().unwrap_or("").is_empty() {
                return Err(ValidationError::invalid(
                    "storage.rest_api_key",
                    "required when storage.backend is 'rest'",
                ));
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: default_data_dir(),
            rest_url: None,
            rest_api_key: None,
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_is_the_default_and_validates() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rest_backend_requires_url_and_key() {
        let config = StorageConfig {
            backend: StorageBackend::Rest,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StorageConfig {
            backend: StorageBackend::Rest,
            rest_url: Some("https://db.example.com/rest/v1".to_string()),
            rest_api_key: Some("service-key".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
