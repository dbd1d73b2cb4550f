//! System-level modules
//!
//! - Logging initialisation
//! - Event channel for external indexers

pub mod event;
pub mod logging;
