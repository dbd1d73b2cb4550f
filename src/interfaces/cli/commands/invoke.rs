use colored::Colorize;

use crate::contract::{Contract, ExecutionContext, Identity, Outcome, TriggerType, Value};
use crate::interfaces::cli::CliError;

/// Raw dispatcher call assembled from command-line flags.
pub struct InvokeRequest {
    pub operation: String,
    pub args: Vec<String>,
    pub trigger: TriggerType,
    pub height: u64,
    pub sender: Option<Identity>,
    pub witnesses: Vec<Identity>,
    pub hex_args: bool,
}

impl InvokeRequest {
    fn context(&self) -> ExecutionContext {
        let mut ctx = ExecutionContext::new(self.trigger, self.height);
        ctx.sender = self.sender;
        ctx.witnesses = self.witnesses.clone();
        ctx
    }

    fn values(&self) -> Result<Vec<Value>, CliError> {
        self.args
            .iter()
            .map(|arg| {
                if self.hex_args {
                    hex::decode(arg.trim_start_matches("0x"))
                        .map(Value::Bytes)
                        .map_err(|e| CliError::ParseError(format!("Invalid hex argument '{}': {}", arg, e)))
                } else {
                    Ok(Value::String(arg.clone()))
                }
            })
            .collect()
    }
}

/// Print the flattened host result; rejections show their sentinel.
pub fn invoke(contract: &Contract, request: InvokeRequest) -> Result<(), CliError> {
    let ctx = request.context();
    let args = request.values()?;

    match contract.invoke(&ctx, &request.operation, &args)? {
        Outcome::Completed(value) => println!("{}", value),
        Outcome::Rejected(rejection) => {
            println!("{}", rejection.sentinel().yellow());
            eprintln!("{} {}", "ℹ".bold().blue(), rejection);
        }
    }
    Ok(())
}
