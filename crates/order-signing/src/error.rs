//! Error types for order hashing, signing and verification.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {field} address {value:?}: {reason}")]
    InvalidAddress {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid signature encoding: {reason}")]
    InvalidSignatureEncoding { reason: String },

    #[error("Invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    #[error("Signature recovery failed: {reason}")]
    RecoveryFailed { reason: String },

    #[error("Signing failed: {reason}")]
    SigningFailed { reason: String },

    #[error("Invalid {field} value {value:?}: {reason}")]
    InvalidAmount {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Expiry timestamp {timestamp} is before the unix epoch")]
    InvalidExpiry { timestamp: i64 },

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] config::ConfigError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
