//! Bounded base-58 encoder
//!
//! Encodes a non-negative integer, given as an unsigned little-endian byte
//! magnitude, into at most `max_length` base-58 digits. Only the
//! least-significant digits are kept, so the encoding is lossy for large
//! inputs and is not a general-purpose integer codec.

/// Conventional Base58 alphabet (no `0`, `I`, `O`, `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Result of encoding a zero input or of a zero digit budget.
pub const NUL_SENTINEL: char = '\0';

const BASE: u32 = 58;

/// Encode `le_bytes` (byte 0 least significant) keeping at most
/// `max_length` low-order digits.
///
/// Returns a single NUL character when the input is zero or
/// `max_length` is 0.
pub fn encode_bounded(le_bytes: &[u8], max_length: usize) -> String {
    let mut magnitude = le_bytes.to_vec();
    trim_high_zeros(&mut magnitude);

    let mut digits = Vec::with_capacity(max_length.min(le_bytes.len() * 2 + 1));
    while digits.len() < max_length && !magnitude.is_empty() {
        let idx = div_rem_in_place(&mut magnitude);
        digits.push(ALPHABET[idx as usize]);
        trim_high_zeros(&mut magnitude);
    }

    if digits.is_empty() {
        return NUL_SENTINEL.to_string();
    }

    // 低位先产出，需要反转
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Encode a native integer through the same routine.
pub fn encode_u64(value: u64, max_length: usize) -> String {
    encode_bounded(&value.to_le_bytes(), max_length)
}

/// Whether `s` is the NUL sentinel rather than real digits.
pub fn is_sentinel(s: &str) -> bool {
    s.len() == 1 && s.starts_with(NUL_SENTINEL)
}

/// Divide the little-endian magnitude by 58 in place, returning the remainder.
fn div_rem_in_place(le: &mut [u8]) -> u8 {
    let mut rem: u32 = 0;
    for byte in le.iter_mut().rev() {
        let acc = (rem << 8) | u32::from(*byte);
        // acc < 58 * 256, so the quotient always fits in a byte
        *byte = (acc / BASE) as u8;
        rem = acc % BASE;
    }
    rem as u8
}

fn trim_high_zeros(le: &mut Vec<u8>) {
    while le.last() == Some(&0) {
        le.pop();
    }
}
