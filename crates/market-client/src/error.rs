//! Error types for the client.

use std::fmt;

/// Client error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error (bad URL, bad address).
    Config(String),
    /// Transport-level failure talking to the fullnode.
    Rpc(String),
    /// The node answered, but with an error status or an unexpected shape.
    Chain(String),
    /// A transaction payload could not be built (e.g. arithmetic overflow).
    Payload(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Rpc(msg) => write!(f, "rpc error: {msg}"),
            Error::Chain(msg) => write!(f, "chain error: {msg}"),
            Error::Payload(msg) => write!(f, "payload error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Rpc(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(err.to_string())
    }
}
