use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::KeyValueStore;
use super::keys::{sender_key, url_key};
use crate::codegen::{CodeGenerator, ShortCode};
use crate::contract::{ExecutionContext, Value};
use crate::errors::{LedgerlinkError, Result};
use crate::system::event::{Event, EventBus};

/// Persisted fields of one short code. Either field is empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub url: Vec<u8>,
    pub sender: Vec<u8>,
}

impl Record {
    pub fn url_lossy(&self) -> String {
        String::from_utf8_lossy(&self.url).into_owned()
    }

    pub fn sender_hex(&self) -> String {
        hex::encode(&self.sender)
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.sender.is_empty()
    }

    /// Rebuild a record from a `getURLInfo` result (`[url, sender]`).
    pub fn from_info_value(value: &Value) -> Option<Record> {
        let Value::Array(fields) = value else {
            return None;
        };
        match fields.as_slice() {
            [url, sender] => Some(Record {
                url: url.as_bytes()?.to_vec(),
                sender: sender.as_bytes()?.to_vec(),
            }),
            _ => None,
        }
    }
}

/// `getURLInfo` result shape.
impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Array(vec![Value::Bytes(record.url), Value::Bytes(record.sender)])
    }
}

/// `code -> (url, sender)` on top of a flat key-value store.
///
/// Records are only ever created by [`RecordStore::add`]. A generated code
/// that collides with an existing one overwrites it; no uniqueness check is
/// made.
#[derive(Clone)]
pub struct RecordStore {
    storage: Arc<dyn KeyValueStore>,
    events: Arc<EventBus>,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, events: Arc<EventBus>) -> Self {
        Self { storage, events }
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    /// Derive a code for `url` from the context's height and sender, persist
    /// both fields, and announce it.
    ///
    /// `notify(code)` is published before the write and `urladd(code, url)`
    /// after it.
    pub fn add(&self, ctx: &ExecutionContext, url: &[u8]) -> Result<ShortCode> {
        let sender = ctx.sender.ok_or_else(|| {
            LedgerlinkError::missing_context("invocation has no funding reference to take the sender from")
        })?;

        let code = CodeGenerator::generate(ctx.height, sender.as_ref(), url);
        self.events.publish(Event::notify(&code));

        debug!("Writing record keys for code {}", code);
        self.storage.put_batch(&[
            (url_key(&code), url.to_vec()),
            (sender_key(&code), sender.as_ref().to_vec()),
        ])?;

        self.events.publish(Event::url_add(&code, url));
        info!(
            "Added code {} at height {} by {}",
            code, ctx.height, sender
        );

        Ok(code)
    }

    /// URL stored for `code`, empty when unknown.
    pub fn get(&self, code: &ShortCode) -> Result<Vec<u8>> {
        debug!("Looking up url for code {}", code);
        self.storage.get(&url_key(code))
    }

    pub fn get_info(&self, code: &ShortCode) -> Result<Record> {
        debug!("Looking up record for code {}", code);
        Ok(Record {
            url: self.storage.get(&url_key(code))?,
            sender: self.storage.get(&sender_key(code))?,
        })
    }
}
