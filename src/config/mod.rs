//! Application configuration.
//!
//! Type-safe configuration loaded from environment variables via the
//! `config` and `dotenvy` crates, prefixed `GROUNDPASS` with `__` as the
//! nesting separator (`GROUNDPASS__SERVER__PORT=5000`).

mod error;
mod payment;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store configuration (file backend or remote table store)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Payment gateway configuration
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, reading a `.env` file
    /// first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GROUNDPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}
