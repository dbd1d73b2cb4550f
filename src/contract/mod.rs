//! Entry dispatcher
//!
//! Each invocation is independent. In verification mode the only question
//! is whether the owner witnessed the call; in application mode a named
//! operation is routed to the record store.

pub mod context;
pub mod identity;
pub mod outcome;
pub mod value;

use std::str::FromStr;
use std::sync::Arc;

use strum::{AsRefStr, EnumIter, EnumString};
use tracing::{debug, warn};

pub use context::{ExecutionContext, TriggerType};
pub use identity::{IDENTITY_LENGTH, Identity};
pub use outcome::{INCORRECT_ARGUMENT_COUNT, Outcome, Rejection, UNKNOWN_OPERATION};
pub use value::Value;

use crate::codegen::ShortCode;
use crate::config::ContractConfig;
use crate::errors::{LedgerlinkError, Result};
use crate::storage::{KeyValueStore, RecordStore};
use crate::system::event::EventBus;

/// Operations reachable in application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
pub enum Operation {
    #[strum(serialize = "shortenerURL")]
    ShortenerUrl,
    #[strum(serialize = "addURL")]
    AddUrl,
    #[strum(serialize = "getURL")]
    GetUrl,
    #[strum(serialize = "getURLInfo")]
    GetUrlInfo,
}

impl Operation {
    pub fn arity(&self) -> usize {
        match self {
            Operation::ShortenerUrl => 0,
            Operation::AddUrl | Operation::GetUrl | Operation::GetUrlInfo => 1,
        }
    }
}

pub struct Contract {
    config: ContractConfig,
    records: RecordStore,
    events: Arc<EventBus>,
}

impl Contract {
    pub fn new(config: ContractConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_event_bus(config, storage, Arc::new(EventBus::default()))
    }

    pub fn with_event_bus(
        config: ContractConfig,
        storage: Arc<dyn KeyValueStore>,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            config,
            records: RecordStore::new(storage, events.clone()),
            events,
        }
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn invoke(&self, ctx: &ExecutionContext, operation: &str, args: &[Value]) -> Result<Outcome> {
        match ctx.trigger {
            TriggerType::Verification => {
                let is_owner = ctx.check_witness(&self.config.owner);
                debug!("Verification request, owner witnessed: {}", is_owner);
                Ok(Outcome::Completed(Value::Bool(is_owner)))
            }
            TriggerType::Application => self.dispatch(ctx, operation, args),
            TriggerType::Other(code) => {
                warn!("Unrecognised trigger {:#04x}, refusing", code);
                Ok(Outcome::Completed(Value::Bool(false)))
            }
        }
    }

    fn dispatch(&self, ctx: &ExecutionContext, operation: &str, args: &[Value]) -> Result<Outcome> {
        let Ok(op) = Operation::from_str(operation) else {
            debug!("Unknown operation: {}", operation);
            return Ok(Outcome::Rejected(Rejection::UnknownOperation(
                operation.to_string(),
            )));
        };

        // shortenerURL ignores any arguments it is given
        if op != Operation::ShortenerUrl && args.len() != op.arity() {
            return Ok(Outcome::Rejected(Rejection::IncorrectArgumentCount {
                operation: op.as_ref().to_string(),
                expected: op.arity(),
                actual: args.len(),
            }));
        }

        let value = match op {
            Operation::ShortenerUrl => Value::String(self.config.shortener_url.clone()),
            Operation::AddUrl => {
                let url = argument_bytes(op, &args[0])?;
                let code = self.records.add(ctx, url)?;
                Value::String(code.into_string())
            }
            Operation::GetUrl => {
                let code = argument_code(op, &args[0])?;
                Value::Bytes(self.records.get(&code)?)
            }
            Operation::GetUrlInfo => {
                let code = argument_code(op, &args[0])?;
                Value::from(self.records.get_info(&code)?)
            }
        };

        Ok(Outcome::Completed(value))
    }
}

fn argument_bytes(op: Operation, arg: &Value) -> Result<&[u8]> {
    arg.as_bytes().ok_or_else(|| {
        LedgerlinkError::invalid_argument(format!(
            "{} expects a string or byte array argument",
            op.as_ref()
        ))
    })
}

fn argument_code(op: Operation, arg: &Value) -> Result<ShortCode> {
    let bytes = argument_bytes(op, arg)?;
    ShortCode::try_from(bytes.to_vec()).map_err(|e| {
        LedgerlinkError::invalid_argument(format!("{}: {}", op.as_ref(), e.message()))
    })
}
