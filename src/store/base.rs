use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use super::cookie::Cookie;
use super::file_store::FileTokenStore;
use super::memory_store::MemoryTokenStore;
use crate::config::{StoreBackend, StoreConfig};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cookie store IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cookie store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cookie store is enabled, but no backend config is provided")]
    MissingBackend,
}

/// The TokenStore trait abstracts cookie persistence (get, set, remove).
///
/// Expired cookies are never returned.
pub trait TokenStore: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<Cookie>, StoreError>;
    fn set(&self, cookie: Cookie) -> Result<(), StoreError>;
    fn remove(&self, name: &str) -> Result<(), StoreError>;
    /// All live cookies, in no particular order.
    fn cookies(&self) -> Result<Vec<Cookie>, StoreError>;
    /// Whether cookies outlive the process.
    fn is_persistent(&self) -> bool {
        true
    }
}

/// Creates a concrete store implementation based on the StoreConfig.
/// If `store.enabled = false`, returns a memory store. Otherwise, picks the specified backend.
pub fn create_token_store(config: &StoreConfig) -> Result<Arc<dyn TokenStore>, StoreError> {
    if !config.enabled {
        info!("Cookie persistence is disabled. Using in-memory cookies.");
        return Ok(Arc::new(MemoryTokenStore::new()));
    }

    match &config.backend {
        Some(StoreBackend::File(file_config)) => {
            info!("Persisting cookies to '{}'.", file_config.path);
            Ok(Arc::new(FileTokenStore::new(&file_config.path)))
        }
        None => {
            error!("Cookie store is enabled, but no backend config is provided!");
            Err(StoreError::MissingBackend)
        }
    }
}
