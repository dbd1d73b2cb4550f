//! Short code generation
//!
//! A short code is the concatenation of three bounded base-58 segments:
//! chain height (11 digits), submitter identity (2 digits) and URL payload
//! (2 digits). It is a pure function of those three inputs so any replay of
//! the computation yields the same code.

pub mod base58;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerlinkError;

pub use base58::{ALPHABET, NUL_SENTINEL, encode_bounded, encode_u64};

/// Primary key of a record. May contain the NUL sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new<S: Into<String>>(code: S) -> Self {
        ShortCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Escapes the NUL sentinel so codes stay printable.
impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_debug())
    }
}

impl From<&str> for ShortCode {
    fn from(code: &str) -> Self {
        ShortCode(code.to_string())
    }
}

impl From<String> for ShortCode {
    fn from(code: String) -> Self {
        ShortCode(code)
    }
}

/// Codes handed over as raw bytes (e.g. from a host stack item).
///
/// Generated codes are always ASCII, so non-UTF-8 bytes are rejected rather
/// than rewritten into a different storage key.
impl TryFrom<Vec<u8>> for ShortCode {
    type Error = LedgerlinkError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        String::from_utf8(bytes).map(ShortCode).map_err(|e| {
            LedgerlinkError::invalid_argument(format!(
                "short code is not valid UTF-8: {}",
                hex::encode(e.as_bytes())
            ))
        })
    }
}

impl AsRef<[u8]> for ShortCode {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// The three encoded pieces of a short code, in concatenation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub height: String,
    pub sender: String,
    pub url: String,
}

impl Segments {
    pub fn concat(&self) -> ShortCode {
        let mut code = String::with_capacity(self.height.len() + self.sender.len() + self.url.len());
        code.push_str(&self.height);
        code.push_str(&self.sender);
        code.push_str(&self.url);
        ShortCode(code)
    }
}

/// Deterministic short code derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub const HEIGHT_DIGITS: usize = 11;
    pub const SENDER_DIGITS: usize = 2;
    pub const URL_DIGITS: usize = 2;

    /// Encode each input separately.
    ///
    /// `sender` and `url` are read as unsigned little-endian magnitudes of
    /// their raw bytes.
    pub fn segments(height: u64, sender: &[u8], url: &[u8]) -> Segments {
        Segments {
            height: encode_u64(height, Self::HEIGHT_DIGITS),
            sender: encode_bounded(sender, Self::SENDER_DIGITS),
            url: encode_bounded(url, Self::URL_DIGITS),
        }
    }

    pub fn generate(height: u64, sender: &[u8], url: &[u8]) -> ShortCode {
        Self::segments(height, sender, url).concat()
    }
}
