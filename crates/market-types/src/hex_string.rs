//! On-chain byte-string decoding.
//!
//! The marketplace contract stores `name`, `description`, and `uri` as
//! `vector<u8>`, which the fullnode API renders as a `0x`-prefixed hex
//! string. Malformed input is rejected with a [`DecodeError`] rather than
//! silently truncated.

use crate::error::DecodeError;

/// Marker prefix on every chain-rendered byte string.
const HEX_PREFIX: &str = "0x";

/// Decode a `0x`-prefixed hex byte string into UTF-8 text.
///
/// `"0x"` (empty payload) decodes to the empty string.
pub fn decode(input: &str) -> Result<String, DecodeError> {
    let payload = input
        .strip_prefix(HEX_PREFIX)
        .ok_or(DecodeError::MissingPrefix)?;
    if payload.len() % 2 != 0 {
        return Err(DecodeError::OddLength);
    }
    let bytes = hex::decode(payload).map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

/// Encode text the way the chain renders it: `0x` + lowercase hex of the
/// UTF-8 bytes.
pub fn encode(text: &str) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(text.as_bytes()))
}
