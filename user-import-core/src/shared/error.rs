//! Error handling for user import
//!
//! This module defines the error type returned by every validation step of the
//! import pipeline.

use thiserror::Error;

/// User import error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserImportError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid batch size: {0}")]
    BatchSize(String),

    #[error("Missing hash configuration: {0}")]
    MissingHash(String),

    #[error("Reserved claim: {0}")]
    ReservedClaim(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl UserImportError {
    /// Create a missing field error
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::MissingField(message.into())
    }

    /// Create an out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a batch size error
    pub fn batch_size(message: impl Into<String>) -> Self {
        Self::BatchSize(message.into())
    }

    /// Create a missing hash configuration error
    pub fn missing_hash(message: impl Into<String>) -> Self {
        Self::MissingHash(message.into())
    }

    /// Create a reserved claim error
    pub fn reserved_claim(message: impl Into<String>) -> Self {
        Self::ReservedClaim(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for UserImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<base64::DecodeError> for UserImportError {
    fn from(err: base64::DecodeError) -> Self {
        Self::invalid_argument(format!("Base64 decoding error: {}", err))
    }
}

impl From<std::num::ParseIntError> for UserImportError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::config(format!("Integer parse error: {}", err))
    }
}
