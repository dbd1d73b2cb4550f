use std::fmt;

use super::value::Value;

pub const INCORRECT_ARGUMENT_COUNT: &str = "Incorrect number of arguments";
pub const UNKNOWN_OPERATION: &str = "unknown operation";

/// A request the dispatcher declined. Returned as data, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    IncorrectArgumentCount {
        operation: String,
        expected: usize,
        actual: usize,
    },
    UnknownOperation(String),
}

impl Rejection {
    /// Literal string the host sees in place of a result.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Rejection::IncorrectArgumentCount { .. } => INCORRECT_ARGUMENT_COUNT,
            Rejection::UnknownOperation(_) => UNKNOWN_OPERATION,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::IncorrectArgumentCount {
                operation,
                expected,
                actual,
            } => write!(
                f,
                "{}: {} takes {} argument(s), got {}",
                INCORRECT_ARGUMENT_COUNT, operation, expected, actual
            ),
            Rejection::UnknownOperation(name) => write!(f, "{}: {}", UNKNOWN_OPERATION, name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Value),
    Rejected(Rejection),
}

impl Outcome {
    /// Flatten to what the host returns, sentinel strings included.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Completed(value) => value,
            Outcome::Rejected(rejection) => Value::String(rejection.sentinel().to_string()),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }
}
