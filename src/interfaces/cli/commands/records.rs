use colored::Colorize;

use super::helpers::{expect_completed, parse_code, print_empty_lookup};
use crate::contract::{Contract, ExecutionContext, Identity, Value};
use crate::interfaces::cli::CliError;
use crate::storage::Record;

pub fn shortener_url(contract: &Contract) -> Result<(), CliError> {
    let ctx = ExecutionContext::application(0);
    let value = expect_completed(contract.invoke(&ctx, "shortenerURL", &[])?)?;
    println!("{}", value.to_text().blue().underline());
    Ok(())
}

pub fn add_url(
    contract: &Contract,
    url: String,
    height: u64,
    sender: Identity,
) -> Result<(), CliError> {
    let ctx = ExecutionContext::application(height).with_sender(sender);
    let value = expect_completed(contract.invoke(&ctx, "addURL", &[Value::String(url.clone())])?)?;

    println!(
        "{} Added short code: {} -> {}",
        "✓".bold().green(),
        value.to_string().cyan(),
        url.blue().underline()
    );
    Ok(())
}

pub fn get_url(contract: &Contract, code: &str, hex: bool) -> Result<(), CliError> {
    let ctx = ExecutionContext::application(0);
    let arg = parse_code(code, hex)?;
    let value = expect_completed(contract.invoke(&ctx, "getURL", &[arg])?)?;

    let url = value.to_text();
    if url.is_empty() {
        print_empty_lookup(code);
    } else {
        println!("{}", url);
    }
    Ok(())
}

pub fn get_url_info(contract: &Contract, code: &str, hex: bool) -> Result<(), CliError> {
    let ctx = ExecutionContext::application(0);
    let arg = parse_code(code, hex)?;
    let value = expect_completed(contract.invoke(&ctx, "getURLInfo", &[arg])?)?;

    let Some(record) = Record::from_info_value(&value) else {
        return Err(CliError::CommandError(format!(
            "Unexpected getURLInfo result: {}",
            value
        )));
    };

    if record.is_empty() {
        print_empty_lookup(code);
        return Ok(());
    }

    println!("{} {}", "URL:".bold(), record.url_lossy().blue().underline());
    if record.sender.is_empty() {
        println!("{} {}", "Sender:".bold(), "(none)".dimmed());
    } else {
        println!("{} 0x{}", "Sender:".bold(), record.sender_hex().yellow());
    }
    Ok(())
}
