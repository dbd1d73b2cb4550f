use std::fmt;

use serde::{Deserialize, Serialize};

const TRUE_BYTES: &[u8] = &[1];
const FALSE_BYTES: &[u8] = &[];

/// Host stack item, the shape of every argument and return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
}

impl Value {
    /// Raw byte view used for argument coercion. Arrays have none.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bool(true) => Some(TRUE_BYTES),
            Value::Bool(false) => Some(FALSE_BYTES),
            Value::String(s) => Some(s.as_bytes()),
            Value::Bytes(b) => Some(b.as_slice()),
            Value::Array(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Lossy text rendering, used for printing results.
    pub fn to_text(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::String(s) => s.clone(),
            Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(Value::to_text).collect();
                format!("[{}]", parts.join(", "))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text().escape_debug())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_bytes() {
        assert_eq!(Value::from("ab").as_bytes(), Some(&b"ab"[..]));
        assert_eq!(Value::from(vec![1u8, 2]).as_bytes(), Some(&[1u8, 2][..]));
        assert_eq!(Value::Bool(false).as_bytes(), Some(&[][..]));
        assert!(Value::Array(vec![]).as_bytes().is_none());
    }

    #[test]
    fn test_to_text() {
        let v = Value::Array(vec![Value::from("u"), Value::Bool(true)]);
        assert_eq!(v.to_text(), "[u, true]");
    }
}
