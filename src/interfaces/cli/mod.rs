//! CLI interface module

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::AppConfig;
use crate::contract::Contract;
use crate::errors::LedgerlinkError;
use crate::storage::StorageFactory;
use commands::{
    add_url, config_generate, config_show, get_url, get_url_info, invoke, shortener_url, verify,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LedgerlinkError> for CliError {
    fn from(err: LedgerlinkError) -> Self {
        match err {
            LedgerlinkError::InvalidIdentity(_) | LedgerlinkError::InvalidArgument(_) => {
                CliError::ParseError(err.to_string())
            }
            LedgerlinkError::MissingContext(_) | LedgerlinkError::Config(_) => {
                CliError::CommandError(err.to_string())
            }
            _ => CliError::StorageError(err.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &AppConfig) -> Result<(), CliError> {
    match cmd {
        // config 子命令不需要打开存储
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
            ConfigCommands::Show => config_show(config),
        },
        Commands::ShortenerUrl => shortener_url(&open_contract(config)?),
        Commands::Add {
            url,
            height,
            sender,
        } => add_url(&open_contract(config)?, url, height, sender),
        Commands::Get { code, hex } => get_url(&open_contract(config)?, &code, hex),
        Commands::Info { code, hex } => get_url_info(&open_contract(config)?, &code, hex),
        Commands::Verify { witnesses } => verify(&open_contract(config)?, witnesses),
        Commands::Invoke {
            operation,
            args,
            trigger,
            height,
            sender,
            witnesses,
            hex_args,
        } => invoke(
            &open_contract(config)?,
            commands::InvokeRequest {
                operation,
                args,
                trigger,
                height,
                sender,
                witnesses,
                hex_args,
            },
        ),
    }
}

fn open_contract(config: &AppConfig) -> Result<Contract, CliError> {
    let storage = StorageFactory::create(&config.storage)?;
    Ok(Contract::new(config.contract.clone(), storage))
}
