//! Shared helpers for CLI commands

use colored::Colorize;

use crate::contract::{Outcome, Value};
use crate::interfaces::cli::CliError;

/// Turn a command-line code into raw bytes.
///
/// With `hex` the text is decoded as hex; otherwise the two-character
/// escape `\0` is read back as the NUL sentinel, matching how codes are
/// printed.
pub fn parse_code(text: &str, hex: bool) -> Result<Value, CliError> {
    if hex {
        let bytes = hex::decode(text.trim_start_matches("0x"))
            .map_err(|e| CliError::ParseError(format!("Invalid hex code '{}': {}", text, e)))?;
        return Ok(Value::Bytes(bytes));
    }
    Ok(Value::String(text.replace("\\0", "\0")))
}

/// Unwrap a completed outcome, reporting a rejection as a command error.
pub fn expect_completed(outcome: Outcome) -> Result<Value, CliError> {
    match outcome {
        Outcome::Completed(value) => Ok(value),
        Outcome::Rejected(rejection) => Err(CliError::CommandError(rejection.to_string())),
    }
}

pub fn print_empty_lookup(code: &str) {
    println!(
        "{} No URL stored for code: {}",
        "ℹ".bold().blue(),
        code.escape_debug().to_string().magenta()
    );
}
