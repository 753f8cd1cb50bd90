//! Shared error type across wampwire crates.

use thiserror::Error;

/// Stable machine-readable error codes (logs, test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Decoded message list has zero elements.
    EmptyMessage,
    /// Leading element is not a non-negative integer.
    InvalidTypeCode,
    /// Leading element is an integer with no registry entry.
    UnsupportedTypeCode,
    /// Field count outside the kind's declared bounds.
    ArityMismatch,
    /// A field value does not coerce to its schema type.
    FieldTypeMismatch,
    /// Binary string is empty or does not start with NUL.
    MissingBinaryMarker,
    /// Binary string body is not valid base64.
    InvalidBase64,
    /// Outer wire text is malformed.
    TextDecode,
    /// Outer wire text encoding failed.
    Encode,
    /// Rejected serializer configuration.
    InvalidConfig,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyMessage => "EMPTY_MESSAGE",
            ErrorCode::InvalidTypeCode => "INVALID_TYPE_CODE",
            ErrorCode::UnsupportedTypeCode => "UNSUPPORTED_TYPE_CODE",
            ErrorCode::ArityMismatch => "ARITY_MISMATCH",
            ErrorCode::FieldTypeMismatch => "FIELD_TYPE_MISMATCH",
            ErrorCode::MissingBinaryMarker => "MISSING_BINARY_MARKER",
            ErrorCode::InvalidBase64 => "INVALID_BASE64",
            ErrorCode::TextDecode => "TEXT_DECODE",
            ErrorCode::Encode => "ENCODE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WampWireError>;

/// Unified error type used by the core and serializer crates.
#[derive(Debug, Error)]
pub enum WampWireError {
    #[error("empty message")]
    EmptyMessage,
    #[error("message type code must be a non-negative integer, got {0}")]
    InvalidTypeCode(&'static str),
    #[error("unsupported message type code {0}")]
    UnsupportedTypeCode(u64),
    #[error("{kind} takes {min}..={max} fields, got {got}")]
    ArityMismatch {
        kind: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },
    #[error("{field}: expected {expected}, got {got}")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    #[error("binary string does not start with NUL")]
    MissingBinaryMarker,
    #[error("invalid base64 in binary string: {0}")]
    InvalidBase64(String),
    #[error("malformed wire text: {0}")]
    TextDecode(String),
    #[error("wire text encoding failed: {0}")]
    Encode(String),
    #[error("invalid serializer config: {0}")]
    InvalidConfig(String),
}

impl WampWireError {
    /// Map internal error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WampWireError::EmptyMessage => ErrorCode::EmptyMessage,
            WampWireError::InvalidTypeCode(_) => ErrorCode::InvalidTypeCode,
            WampWireError::UnsupportedTypeCode(_) => ErrorCode::UnsupportedTypeCode,
            WampWireError::ArityMismatch { .. } => ErrorCode::ArityMismatch,
            WampWireError::FieldTypeMismatch { .. } => ErrorCode::FieldTypeMismatch,
            WampWireError::MissingBinaryMarker => ErrorCode::MissingBinaryMarker,
            WampWireError::InvalidBase64(_) => ErrorCode::InvalidBase64,
            WampWireError::TextDecode(_) => ErrorCode::TextDecode,
            WampWireError::Encode(_) => ErrorCode::Encode,
            WampWireError::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }
}
