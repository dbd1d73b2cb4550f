//! Storage key derivation
//!
//! A record has no composite value; each field lives under its own key,
//! `<code>__url` and `<code>__sender`.

use crate::codegen::ShortCode;

pub const URL_SUFFIX: &str = "__url";
pub const SENDER_SUFFIX: &str = "__sender";

fn suffixed(code: &[u8], suffix: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(code.len() + suffix.len());
    key.extend_from_slice(code);
    key.extend_from_slice(suffix.as_bytes());
    key
}

pub fn url_key(code: &ShortCode) -> Vec<u8> {
    suffixed(code.as_bytes(), URL_SUFFIX)
}

pub fn sender_key(code: &ShortCode) -> Vec<u8> {
    suffixed(code.as_bytes(), SENDER_SUFFIX)
}
