//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::contract::{Identity, TriggerType};

/// Ledgerlink - an append-only URL shortening registry
#[derive(Parser)]
#[command(name = "ledgerlink")]
#[command(version)]
#[command(about = "An append-only URL shortening registry", long_about = None)]
pub struct Cli {
    /// Load this config file instead of searching the default locations
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the service URL
    ShortenerUrl,

    /// Register a URL and print its short code
    Add {
        /// URL to shorten (not validated)
        url: String,

        /// Chain height to derive the code from
        #[arg(long)]
        height: u64,

        /// Submitter script hash (hex)
        #[arg(long)]
        sender: Identity,
    },

    /// Resolve a short code to its URL
    Get {
        /// Short code; `\0` stands for the NUL sentinel
        code: String,

        /// Treat CODE as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },

    /// Show URL and submitter of a short code
    Info {
        /// Short code; `\0` stands for the NUL sentinel
        code: String,

        /// Treat CODE as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },

    /// Ask whether the given witnesses may spend contract-held assets
    Verify {
        /// Witnessing script hash (hex), repeatable
        #[arg(long = "witness")]
        witnesses: Vec<Identity>,
    },

    /// Run a raw operation through the dispatcher
    Invoke {
        /// Operation name, e.g. addURL
        operation: String,

        /// Operation arguments
        args: Vec<String>,

        /// verification, application or 0x<byte>
        #[arg(long, default_value = "application")]
        trigger: TriggerType,

        #[arg(long, default_value_t = 0)]
        height: u64,

        #[arg(long)]
        sender: Option<Identity>,

        #[arg(long = "witness")]
        witnesses: Vec<Identity>,

        /// Decode ARGS as hex byte arrays
        #[arg(long)]
        hex_args: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
