//! Shared error type across flowgate crates.

use thiserror::Error;

/// Stable error codes surfaced to callers and test vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed encoded payload.
    DecodeFailed,
    /// Serialization failure (should not happen for well-formed models).
    EncodeFailed,
}

impl ErrorCode {
    /// String representation used in diagnostics and vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::DecodeFailed => "DECODE_FAILED",
            ErrorCode::EncodeFailed => "ENCODE_FAILED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Unified error type used by the model and wire layers.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

impl PolicyError {
    /// Map internal error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            PolicyError::Decode(_) => ErrorCode::DecodeFailed,
            PolicyError::Encode(_) => ErrorCode::EncodeFailed,
        }
    }
}
