use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use super::KeyValueStore;
use super::backends::{FileStorage, MemoryStorage};
use crate::config::StorageConfig;
use crate::errors::Result;

pub type StorageConstructor =
    Arc<dyn Fn(&StorageConfig) -> Result<Box<dyn KeyValueStore>> + Send + Sync>;

static STORAGE_REGISTRY: Lazy<RwLock<HashMap<String, StorageConstructor>>> = Lazy::new(|| {
    let mut registry: HashMap<String, StorageConstructor> = HashMap::new();
    registry.insert(
        "memory".to_string(),
        Arc::new(|_config: &StorageConfig| -> Result<Box<dyn KeyValueStore>> {
            Ok(Box::new(MemoryStorage::new()))
        }),
    );
    registry.insert(
        "file".to_string(),
        Arc::new(|config: &StorageConfig| -> Result<Box<dyn KeyValueStore>> {
            Ok(Box::new(FileStorage::open(&config.path)?))
        }),
    );
    RwLock::new(registry)
});

/// Register an additional backend under `name`, replacing any previous one.
pub fn register_storage_plugin<S: Into<String>>(name: S, constructor: StorageConstructor) {
    let name = name.into();
    debug!("Registering storage plugin: {}", name);
    STORAGE_REGISTRY.write().insert(name, constructor);
}

pub fn get_storage_plugin(name: &str) -> Option<StorageConstructor> {
    STORAGE_REGISTRY.read().get(name).cloned()
}

pub fn get_storage_plugin_names() -> Vec<String> {
    STORAGE_REGISTRY.read().keys().cloned().collect()
}

/// 调试函数：打印当前所有已注册的存储后端名称
pub fn debug_storage_registry() {
    let registry = STORAGE_REGISTRY.read();
    debug!("Registered storage backends:");
    for key in registry.keys() {
        debug!(" - {}", key);
    }
}
