use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, error};

use crate::codegen::ShortCode;

/// 广播通道容量
const CHANNEL_CAPACITY: usize = 1024;

/// Externally observable event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// A short code was derived; raised before anything is persisted.
    Notify,
    /// A `(code, url)` pair was persisted.
    UrlAdd,
}

impl EventType {
    /// Name listeners subscribe to.
    pub fn wire_name(&self) -> &'static str {
        match self {
            EventType::Notify => "notify",
            EventType::UrlAdd => "urladd",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPayload {
    Notify { code: ShortCode },
    UrlAdd { code: ShortCode, url: Vec<u8> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub event_type: EventType,
    pub timestamp: SystemTime,
    pub payload: EventPayload,
}

impl Event {
    fn build(event_type: EventType, payload: EventPayload) -> Self {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            timestamp: SystemTime::now(),
            payload,
        }
    }

    pub fn notify(code: &ShortCode) -> Self {
        Self::build(EventType::Notify, EventPayload::Notify { code: code.clone() })
    }

    pub fn url_add(code: &ShortCode, url: &[u8]) -> Self {
        Self::build(
            EventType::UrlAdd,
            EventPayload::UrlAdd {
                code: code.clone(),
                url: url.to_vec(),
            },
        )
    }

    pub fn code(&self) -> &ShortCode {
        match &self.payload {
            EventPayload::Notify { code } | EventPayload::UrlAdd { code, .. } => code,
        }
    }
}

/// Synchronous subscriber invoked inline by [`EventBus::publish`].
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn name(&self) -> &str;

    fn interested_events(&self) -> Vec<EventType>;
}

/// Fire-and-forget event channel.
///
/// Publishing never fails: a missing or lagging broadcast subscriber and a
/// failing handler are logged and otherwise ignored.
pub struct EventBus {
    handlers: Mutex<HashMap<EventType, Vec<Arc<dyn EventHandler>>>>,
    sender: broadcast::Sender<Event>,
    history: Mutex<VecDeque<Event>>,
    max_history: usize,
}

impl EventBus {
    pub fn new(max_history: usize) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            handlers: Mutex::new(HashMap::new()),
            sender,
            history: Mutex::new(VecDeque::new()),
            max_history,
        }
    }

    pub fn register_handler(&self, handler: Arc<dyn EventHandler>) {
        let mut handlers = self.handlers.lock();

        for event_type in handler.interested_events() {
            handlers
                .entry(event_type)
                .or_default()
                .push(handler.clone());
        }
    }

    pub fn publish(&self, event: Event) {
        debug!(
            "Publishing {} event for code {}",
            event.event_type.wire_name(),
            event.code()
        );

        if self.max_history > 0 {
            let mut history = self.history.lock();
            if history.len() == self.max_history {
                history.pop_front();
            }
            history.push_back(event.clone());
        }

        // 没有订阅者时 send 会返回错误，属于正常情况
        let _ = self.sender.send(event.clone());

        let handlers: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .lock()
            .get(&event.event_type)
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            if let Err(e) = handler.handle(&event) {
                error!("Event handler '{}' failed: {}", handler.name(), e);
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn get_history(&self) -> Vec<Event> {
        self.history.lock().iter().cloned().collect()
    }

    pub fn get_history_by_type(&self, event_type: EventType) -> Vec<Event> {
        self.history
            .lock()
            .iter()
            .filter(|event| event.event_type == event_type)
            .cloned()
            .collect()
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        EventBus::new(1000)
    }
}
