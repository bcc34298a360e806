//! Record store adapters.
//!
//! Three interchangeable `RecordStore` implementations: local JSON files,
//! a remote table store, and an in-memory store for tests.

mod json_file;
mod memory;
mod rest_table;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use rest_table::RestTableStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::foundation::DomainError;
use crate::ports::RecordStore;

/// Builds the configured record store. Shared by the server and the admin
/// CLI so both always read the same records.
pub fn store_from_config(config: &StorageConfig) -> Result<Arc<dyn RecordStore>, DomainError> {
    match config.backend {
        StorageBackend::File => Ok(Arc::new(JsonFileStore::new(config.data_dir.clone()))),
        StorageBackend::Rest => {
            let url = config
                .rest_url
                .as_deref()
                .ok_or_else(|| DomainError::storage("storage.rest_url is not set"))?;
            let key = config
                .rest_api_key
                .as_deref()
                .ok_or_else(|| DomainError::storage("storage.rest_api_key is not set"))?;
            Ok(Arc::new(RestTableStore::new(url, key)?))
        }
    }
}
