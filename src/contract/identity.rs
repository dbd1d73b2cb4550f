use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{LedgerlinkError, Result};

/// Length of a script hash in bytes.
pub const IDENTITY_LENGTH: usize = 20;

/// Script hash naming a submitter or the contract owner.
///
/// Bytes are kept in the host's little-endian order; hex text is that byte
/// sequence as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity([u8; IDENTITY_LENGTH]);

impl Identity {
    pub const fn new(bytes: [u8; IDENTITY_LENGTH]) -> Self {
        Identity(bytes)
    }

    pub const fn zero() -> Self {
        Identity([0u8; IDENTITY_LENGTH])
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; IDENTITY_LENGTH] = bytes.try_into().map_err(|_| {
            LedgerlinkError::invalid_identity(format!(
                "expected {} bytes, got {}",
                IDENTITY_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Identity(arr))
    }

    pub fn as_bytes(&self) -> &[u8; IDENTITY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

/// Accepts hex with or without a `0x` prefix.
impl FromStr for Identity {
    type Err = LedgerlinkError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let bytes = hex::decode(digits)?;
        Identity::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
