//! Flat key-value storage and the record layer built on top of it
//!
//! The backend is treated as an append-only authenticated store: values are
//! written and read, never updated in place or deleted. An absent key reads
//! back as an empty value, which is indistinguishable from an empty write.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::StorageConfig;
use crate::errors::{LedgerlinkError, Result};

pub mod backends;
pub mod keys;
pub mod records;
pub mod register;

pub use backends::{FileStorage, MemoryStorage};
pub use records::{Record, RecordStore};

/// Byte-oriented key-value backend.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or an empty vector when absent.
    fn get(&self, key: &[u8]) -> Result<Vec<u8>>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Write several entries as one logical write.
    ///
    /// The default falls back to sequential puts and can leave a prefix of
    /// the batch behind on failure. Backends that can commit all entries at
    /// once override it.
    fn put_batch(&self, entries: &[(Vec<u8>, Vec<u8>)]) -> Result<()> {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Number of stored keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn backend_name(&self) -> &'static str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        let backend = config.backend.as_str();
        register::debug_storage_registry();

        let Some(constructor) = register::get_storage_plugin(backend) else {
            error!("Unknown storage backend: {}", backend);
            let mut names = register::get_storage_plugin_names();
            names.sort();
            return Err(LedgerlinkError::storage_plugin_not_found(format!(
                "Unknown storage backend: {}. Supported: {}",
                backend,
                names.join(", ")
            )));
        };

        let storage = constructor(config)?;
        info!("Using storage backend: {}", storage.backend_name());
        Ok(Arc::from(storage))
    }
}
