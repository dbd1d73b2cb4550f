use colored::Colorize;

use super::helpers::expect_completed;
use crate::contract::{Contract, ExecutionContext, Identity};
use crate::interfaces::cli::CliError;

pub fn verify(contract: &Contract, witnesses: Vec<Identity>) -> Result<(), CliError> {
    let ctx = witnesses
        .into_iter()
        .fold(ExecutionContext::verification(), ExecutionContext::with_witness);
    let value = expect_completed(contract.invoke(&ctx, "", &[])?)?;

    if value.as_bool() == Some(true) {
        println!("{} Owner witness present, spend allowed", "✓".bold().green());
    } else {
        println!("{} Owner witness missing, spend refused", "✗".bold().red());
    }
    Ok(())
}
