//! Storage backend and record store tests

use std::sync::Arc;

use ledgerlink::codegen::ShortCode;
use ledgerlink::config::StorageConfig;
use ledgerlink::contract::{ExecutionContext, Identity, Value};
use ledgerlink::errors::LedgerlinkError;
use ledgerlink::storage::keys::{sender_key, url_key};
use ledgerlink::storage::register::{get_storage_plugin_names, register_storage_plugin};
use ledgerlink::storage::{
    FileStorage, KeyValueStore, MemoryStorage, Record, RecordStore, StorageFactory,
};
use ledgerlink::system::event::{EventBus, EventType};
use tempfile::TempDir;

fn sender() -> Identity {
    let mut bytes = [0u8; 20];
    bytes[0] = 0x01;
    bytes[1] = 0x02;
    Identity::new(bytes)
}

fn memory_records() -> (RecordStore, Arc<dyn KeyValueStore>, Arc<EventBus>) {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStorage::new());
    let events = Arc::new(EventBus::new(100));
    (
        RecordStore::new(storage.clone(), events.clone()),
        storage,
        events,
    )
}

// =============================================================================
// 存储工厂
// =============================================================================

#[cfg(test)]
mod factory_tests {
    use super::*;

    #[test]
    fn test_builtin_backends_registered() {
        let names = get_storage_plugin_names();
        assert!(names.contains(&"memory".to_string()));
        assert!(names.contains(&"file".to_string()));
    }

    #[test]
    fn test_create_memory_backend() {
        let storage = StorageFactory::create(&StorageConfig::memory()).unwrap();
        assert_eq!(storage.backend_name(), "memory");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_create_file_backend() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("store.json");
        let storage = StorageFactory::create(&StorageConfig::file(&path)).unwrap();
        assert_eq!(storage.backend_name(), "file");
        assert!(path.exists());
    }

    #[test]
    fn test_unknown_backend() {
        let config = StorageConfig {
            backend: "leveldb".to_string(),
            ..StorageConfig::default()
        };
        let err = StorageFactory::create(&config).err().expect("should fail");
        assert!(matches!(err, LedgerlinkError::StoragePluginNotFound(_)));
        assert!(err.message().contains("leveldb"));
        assert!(err.message().contains("memory"));
    }

    #[test]
    fn test_register_custom_backend() {
        register_storage_plugin(
            "scratch",
            Arc::new(|_config: &StorageConfig| -> ledgerlink::errors::Result<Box<dyn KeyValueStore>> {
                Ok(Box::new(MemoryStorage::new()))
            }),
        );
        let config = StorageConfig {
            backend: "scratch".to_string(),
            ..StorageConfig::default()
        };
        assert!(StorageFactory::create(&config).is_ok());
    }
}

// =============================================================================
// 文件后端
// =============================================================================

#[cfg(test)]
mod file_backend_tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path().join("s.json")).unwrap();
        assert_eq!(storage.get(b"absent").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");

        {
            let storage = FileStorage::open(&path).unwrap();
            storage.put(b"2j\0\0__url", b"https://example.com").unwrap();
            storage
                .put_batch(&[(b"a".to_vec(), vec![0x00, 0xff]), (b"b".to_vec(), vec![])])
                .unwrap();
            assert_eq!(storage.len(), 3);
        }

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.len(), 3);
        assert_eq!(
            reopened.get(b"2j\0\0__url").unwrap(),
            b"https://example.com".to_vec()
        );
        assert_eq!(reopened.get(b"a").unwrap(), vec![0x00, 0xff]);
        assert!(reopened.get(b"b").unwrap().is_empty());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("s.json");
        let storage = FileStorage::open(&path).unwrap();
        storage.put(b"k", b"v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "not json").unwrap();
        let err = FileStorage::open(&path).err().expect("should fail");
        assert!(matches!(err, LedgerlinkError::Serialization(_)));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, r#"{"version": 99, "entries": {}}"#).unwrap();
        assert!(FileStorage::open(&path).is_err());
    }
}

// =============================================================================
// 记录存储
// =============================================================================

#[cfg(test)]
mod record_store_tests {
    use super::*;

    #[test]
    fn test_add_writes_both_fields() {
        let (records, storage, _) = memory_records();
        let ctx = ExecutionContext::application(100).with_sender(sender());

        let code = records.add(&ctx, b"https://example.com").unwrap();

        assert_eq!(code.as_str(), "2j9rum");
        assert_eq!(storage.len(), 2);
        assert_eq!(
            storage.get(b"2j9rum__url").unwrap(),
            b"https://example.com".to_vec()
        );
        assert_eq!(
            storage.get(b"2j9rum__sender").unwrap(),
            sender().as_bytes().to_vec()
        );
    }

    #[test]
    fn test_round_trip() {
        let (records, _, _) = memory_records();
        let ctx = ExecutionContext::application(4242).with_sender(sender());

        let code = records.add(&ctx, b"https://example.com/a/long/path").unwrap();

        assert_eq!(
            records.get(&code).unwrap(),
            b"https://example.com/a/long/path".to_vec()
        );
        assert_eq!(
            records.get_info(&code).unwrap(),
            Record {
                url: b"https://example.com/a/long/path".to_vec(),
                sender: sender().as_bytes().to_vec(),
            }
        );
    }

    #[test]
    fn test_record_helpers() {
        let record = Record {
            url: b"https://example.com".to_vec(),
            sender: vec![0x01, 0x02, 0xff],
        };
        assert_eq!(record.url_lossy(), "https://example.com");
        assert_eq!(record.sender_hex(), "0102ff");
        assert!(!record.is_empty());
        assert!(Record::default().is_empty());

        // getURLInfo 的返回值可以还原为记录
        let value = Value::from(record.clone());
        assert_eq!(Record::from_info_value(&value), Some(record));
        assert_eq!(Record::from_info_value(&Value::Bool(true)), None);
        assert_eq!(
            Record::from_info_value(&Value::Array(vec![Value::Bytes(vec![])])),
            None
        );
    }

    #[test]
    fn test_unknown_code_is_empty_not_error() {
        let (records, _, _) = memory_records();
        let code = ShortCode::from("never");
        assert!(records.get(&code).unwrap().is_empty());
        assert_eq!(records.get_info(&code).unwrap(), Record::default());
    }

    #[test]
    fn test_fields_are_independent() {
        let (records, storage, _) = memory_records();
        let code = ShortCode::from("half");
        storage.put(&url_key(&code), b"https://only-url.example").unwrap();

        let info = records.get_info(&code).unwrap();
        assert_eq!(info.url, b"https://only-url.example".to_vec());
        assert!(info.sender.is_empty());
        assert!(storage.get(&sender_key(&code)).unwrap().is_empty());
    }

    #[test]
    fn test_colliding_code_overwrites() {
        let (records, _, _) = memory_records();
        // 100 and 100 + 58^2 share their two low base-58 digits ("2j")
        let mut first_bytes = [0u8; 20];
        first_bytes[0] = 100;
        let mut second_bytes = [0u8; 20];
        second_bytes[..2].copy_from_slice(&3464u16.to_le_bytes());
        let first = Identity::new(first_bytes);
        let second = Identity::new(second_bytes);

        let ctx_a = ExecutionContext::application(7).with_sender(first);
        let ctx_b = ExecutionContext::application(7).with_sender(second);
        let code_a = records.add(&ctx_a, b"https://example.com").unwrap();
        let code_b = records.add(&ctx_b, b"https://example.org").unwrap();

        assert_ne!(code_a, code_b);

        let code_c = records.add(&ctx_b, b"https://example.com").unwrap();
        assert_eq!(code_a, code_c);
        let info = records.get_info(&code_a).unwrap();
        assert_eq!(info.sender, second.as_bytes().to_vec());
    }

    #[test]
    fn test_add_without_sender_fails_cleanly() {
        let (records, storage, events) = memory_records();
        let ctx = ExecutionContext::application(100);

        let err = records.add(&ctx, b"https://example.com").unwrap_err();

        assert!(matches!(err, LedgerlinkError::MissingContext(_)));
        assert!(storage.is_empty());
        assert!(events.get_history().is_empty());
    }

    #[test]
    fn test_add_emits_notify_then_urladd() {
        let (records, _, events) = memory_records();
        let ctx = ExecutionContext::application(100).with_sender(sender());

        let code = records.add(&ctx, b"https://example.com").unwrap();

        let history = events.get_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].event_type, EventType::Notify);
        assert_eq!(history[1].event_type, EventType::UrlAdd);
        assert_eq!(history[0].code(), &code);
        assert_eq!(history[1].code(), &code);
    }

    #[test]
    fn test_records_survive_file_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        let ctx = ExecutionContext::application(100).with_sender(sender());

        let code = {
            let storage: Arc<dyn KeyValueStore> = Arc::new(FileStorage::open(&path).unwrap());
            RecordStore::new(storage, Arc::new(EventBus::default()))
                .add(&ctx, b"https://example.com")
                .unwrap()
        };

        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStorage::open(&path).unwrap());
        let records = RecordStore::new(storage, Arc::new(EventBus::default()));
        assert_eq!(records.get(&code).unwrap(), b"https://example.com".to_vec());
    }
}
