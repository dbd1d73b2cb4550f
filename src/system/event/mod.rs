//! Event channel for external indexers
//!
//! `notify(code)` is raised as soon as a code is derived, `urladd(code, url)`
//! once the record is written.

pub mod events;

pub use events::{Event, EventBus, EventHandler, EventPayload, EventType};
