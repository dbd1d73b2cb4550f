//! Configuration
//!
//! TOML file (see [`CONFIG_PATHS`]) overlaid with `LEDGERLINK__*`
//! environment variables.

mod r#impl;
mod structs;

pub use r#impl::{CONFIG_PATHS, ENV_PREFIX, get_config, init_config, update_config};
pub use structs::*;
