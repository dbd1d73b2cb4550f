use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::errors::{LedgerlinkError, Result};
use crate::storage::KeyValueStore;

const FORMAT_VERSION: u32 = 1;

/// On-disk document. Keys and values are hex so that arbitrary bytes
/// (including the NUL sentinel inside codes) survive JSON.
#[derive(Serialize, Deserialize, Default)]
struct StorageDocument {
    version: u32,
    entries: BTreeMap<String, String>,
}

/// JSON file backend.
///
/// The whole map is kept in memory and the file is rewritten on every
/// write through a temporary file and a rename, so a batch either lands
/// completely or not at all.
pub struct FileStorage {
    file_path: PathBuf,
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl FileStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let entries = Self::load_from_file(&file_path)?;
        info!(
            "FileStorage loaded {} entries from {}",
            entries.len(),
            file_path.display()
        );

        Ok(FileStorage {
            file_path,
            entries: RwLock::new(entries),
        })
    }

    fn load_from_file(path: &Path) -> Result<BTreeMap<Vec<u8>, Vec<u8>>> {
        if !path.exists() {
            info!("Storage file not found, creating empty store: {}", path.display());
            let empty = BTreeMap::new();
            Self::save_to_file(path, &empty)?;
            return Ok(empty);
        }

        let content = fs::read_to_string(path)?;
        let document: StorageDocument = serde_json::from_str(&content).map_err(|e| {
            error!("Failed to parse storage file {}: {}", path.display(), e);
            LedgerlinkError::serialization(format!(
                "Failed to parse storage file {}: {}",
                path.display(),
                e
            ))
        })?;

        if document.version != FORMAT_VERSION {
            return Err(LedgerlinkError::serialization(format!(
                "Unsupported storage file version {} (expected {})",
                document.version, FORMAT_VERSION
            )));
        }

        document
            .entries
            .into_iter()
            .map(|(k, v)| {
                let key = hex::decode(&k).map_err(|e| {
                    LedgerlinkError::serialization(format!("Invalid key '{}': {}", k, e))
                })?;
                let value = hex::decode(&v).map_err(|e| {
                    LedgerlinkError::serialization(format!("Invalid value for key '{}': {}", k, e))
                })?;
                Ok((key, value))
            })
            .collect()
    }

    fn save_to_file(path: &Path, entries: &BTreeMap<Vec<u8>, Vec<u8>>) -> Result<()> {
        let document = StorageDocument {
            version: FORMAT_VERSION,
            entries: entries
                .iter()
                .map(|(k, v)| (hex::encode(k), hex::encode(v)))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut tmp_path = path.as_os_str().to_owned();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        debug!("Saved {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        Ok(self.entries.read().get(key).cloned().unwrap_or_default())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.put_batch(&[(key.to_vec(), value.to_vec())])
    }

    fn put_batch(&self, batch: &[(Vec<u8>, Vec<u8>)]) -> Result<()> {
        let mut guard = self.entries.write();
        let mut next = guard.clone();
        for (key, value) in batch {
            next.insert(key.clone(), value.clone());
        }

        // 文件写入成功后才更新内存
        Self::save_to_file(&self.file_path, &next)?;
        *guard = next;
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
