use dashmap::DashMap;

use crate::errors::Result;
use crate::storage::KeyValueStore;

/// Process-lifetime store, used for tests and embedding.
///
/// Puts cannot fail, so the default sequential `put_batch` never leaves a
/// partial record behind.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        Ok(self
            .entries
            .get(key)
            .map(|v| v.value().clone())
            .unwrap_or_default())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.get(b"nope").unwrap().is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let storage = MemoryStorage::new();
        storage.put(b"k", b"v").unwrap();
        assert_eq!(storage.get(b"k").unwrap(), b"v".to_vec());
        assert_eq!(storage.len(), 1);
    }
}
