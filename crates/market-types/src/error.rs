//! Error types for decoding and normalization.

/// Failure while decoding an on-chain hex byte string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input does not start with the `0x` marker.
    MissingPrefix,
    /// Hex payload has an odd number of digits.
    OddLength,
    /// A character outside `[0-9a-fA-F]` appeared in the payload.
    InvalidHex(String),
    /// Decoded bytes are not valid UTF-8.
    InvalidUtf8,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "byte string missing 0x prefix"),
            Self::OddLength => write!(f, "hex payload has odd length"),
            Self::InvalidHex(msg) => write!(f, "invalid hex: {msg}"),
            Self::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Failure while converting one raw on-chain record into a canonical [`Nft`].
///
/// These are per-item errors: batch normalization drops the offending record
/// and keeps going.
///
/// [`Nft`]: crate::Nft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A required field is absent from the raw record.
    MissingField(&'static str),
    /// A field is present but has an unusable shape or value.
    InvalidField(&'static str, String),
    /// A text field failed byte-string decoding.
    Decode(&'static str, DecodeError),
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "missing field: {name}"),
            Self::InvalidField(name, msg) => write!(f, "invalid field {name}: {msg}"),
            Self::Decode(name, err) => write!(f, "field {name}: {err}"),
        }
    }
}

impl std::error::Error for NormalizeError {}

impl NormalizeError {
    pub fn invalid(name: &'static str, value: &serde_json::Value) -> Self {
        Self::InvalidField(name, value.to_string())
    }
}
