//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of the quote flow: deadlines,
//! transport, decoding, storage, and field coercion. Both binaries propagate this
//! single type so that the HTTP boundary (server) and the fatal exit path (client)
//! can log one consistent message.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A deadline elapsed before the named operation completed.
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Connection or transport failure while talking HTTP.
    #[error("Network error: {0}")]
    Network(String),

    /// The peer answered with a status other than success.
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Malformed JSON or JSON that does not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Insert or query failure in the embedded store.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A payload field is missing or cannot be coerced to its column type.
    #[error("Field coercion failure on `{field}`: {reason}")]
    FieldCoercion {
        /// Provider field name (e.g. `varBid`).
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Invalid configuration value (currency pair, address, ...).
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            QuoteError::Timeout(err.to_string())
        } else if err.is_decode() {
            QuoteError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            QuoteError::UnexpectedStatus(status.as_u16())
        } else {
            QuoteError::Network(err.to_string())
        }
    }
}
