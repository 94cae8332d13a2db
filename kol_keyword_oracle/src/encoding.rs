//! Encoding results the way an on-chain decoder reads a `uint256`:
//! 32 bytes, big-endian.

use std::fmt::Write;

use crate::types::KeywordsFound;

pub type Uint256 = [u8; 32];

/// Encode a number as a big-endian `uint256`.
pub fn encode_uint256(value: u128) -> Uint256 {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Read a big-endian `uint256` back.
///
/// Returns [`None`] if it's not 32 bytes long or doesn't fit in a [`u128`].
pub fn decode_uint256(word: &[u8]) -> Option<u128> {
    let word: &Uint256 = word.try_into().ok()?;
    let (high, low) = word.split_at(16);

    if high.iter().any(|&x| x != 0) {
        return None;
    }

    Some(u128::from_be_bytes(low.try_into().ok()?))
}

/// `1` for found, `0` for not.
pub fn encode_result(found: KeywordsFound) -> Uint256 {
    encode_uint256(u8::from(found).into())
}

/// `0x` followed by 64 lowercase hex digits.
pub fn to_hex(word: &Uint256) -> String {
    let mut hex = String::with_capacity(2 + word.len() * 2);
    hex.push_str("0x");
    for byte in word {
        write!(hex, "{byte:02x}").expect("Writing to a String never fails");
    }
    hex
}
