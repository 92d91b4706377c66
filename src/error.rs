//! Error types for decoding, fetching and configuration

use thiserror::Error;

/// Failure while decoding a byte buffer.
///
/// The decoder never logs or recovers; every variant is handed back to the
/// caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A read needed more bytes than remain after `offset`.
    #[error("out of bounds: need {needed} bytes at offset {offset}, {available} available")]
    OutOfBounds {
        offset: usize,
        needed: u64,
        available: usize,
    },

    /// Bytes remain after the last field was read.
    #[error("trailing data: {remaining} bytes left after {consumed} consumed")]
    TrailingData { consumed: usize, remaining: usize },

    /// Witness marker was present but followed by an unknown flag.
    #[error("invalid witness flag: 0x{0:02x}")]
    InvalidWitnessFlag(u8),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("invalid configuration: {0}")]
    Validate(String),
}

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid transaction id: {0}")]
    InvalidTxid(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("transaction id mismatch: requested {expected}, decoded {actual}")]
    TxidMismatch { expected: String, actual: String },

    #[error("block hash mismatch: requested {expected}, header hashes to {actual}")]
    BlockHashMismatch { expected: String, actual: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
