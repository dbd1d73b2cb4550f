//! Ledgerlink - an append-only URL shortening registry
//!
//! A long URL is turned into a short code derived deterministically from
//! the chain height, the submitter's identity and the URL itself. The code
//! is stored against the URL and the submitter in a flat key-value store
//! and can later be resolved back to either.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `codegen`: Bounded base-58 encoding and short code derivation
//! - `storage`: Key-value backends and the record layer
//! - `contract`: Operation dispatcher, execution context, stack values
//! - `config`: Configuration management
//! - `system`: Logging and the event channel
//! - `interfaces`: User interfaces (CLI)

#[cfg(feature = "cli")]
pub mod cli;
pub mod codegen;
pub mod config;
pub mod contract;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod storage;
pub mod system;
