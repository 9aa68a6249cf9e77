//! Codec-level errors for ISO 8583 message processing
//!
//! Structural and format errors are fatal to the operation in progress:
//! pack, unpack and validation abort rather than return a partial result.
//! Business-code lookup misses are deliberately NOT here - those are tagged
//! values (`types::CodeLookup`) the caller branches on.

use thiserror::Error;

/// ISO 8583 encoding and decoding errors with diagnostic context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// MTI failed the per-position digit rules
    #[error("invalid MTI {mti:?}: {reason}")]
    InvalidMti { mti: String, reason: &'static str },

    /// Field number outside the bitmap-addressable range 2-128
    #[error("field {field} is outside the encodable range 2-128")]
    InvalidField { field: u8 },

    /// Field number with no catalog entry
    #[error("field {field} has no catalog entry")]
    UnknownField { field: String },

    /// Value longer than the descriptor or its length prefix can carry
    #[error("field {field}: value of {len} exceeds capacity {capacity}")]
    FieldTooLong {
        field: String,
        len: usize,
        capacity: usize,
    },

    /// Buffer ended before a signaled element was fully read
    #[error("truncated buffer: need {need} bytes, got {got} ({context})")]
    TruncatedBuffer {
        need: usize,
        got: usize,
        context: String,
    },

    /// Bytes remained after the last signaled field (recoverable: callers
    /// may opt to ignore via `UnpackOptions`)
    #[error("trailing bytes: consumed {consumed} of {total}")]
    TrailingBytes { consumed: usize, total: usize },

    /// Nested bitmap in a composite field claims more data than available
    #[error("malformed extension {path}: {detail}")]
    MalformedExtension { path: String, detail: String },

    /// Field body failed charset or encoding rules
    #[error("malformed value in field {field}: {detail}")]
    MalformedValue { field: String, detail: String },
}

impl CodecError {
    pub fn invalid_mti(mti: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidMti {
            mti: mti.into(),
            reason,
        }
    }

    pub fn unknown_field(field: impl ToString) -> Self {
        Self::UnknownField {
            field: field.to_string(),
        }
    }

    pub fn too_long(field: impl ToString, len: usize, capacity: usize) -> Self {
        Self::FieldTooLong {
            field: field.to_string(),
            len,
            capacity,
        }
    }

    pub fn truncated(need: usize, got: usize, context: impl Into<String>) -> Self {
        Self::TruncatedBuffer {
            need,
            got,
            context: context.into(),
        }
    }

    pub fn malformed_extension(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedExtension {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn malformed_value(field: impl ToString, detail: impl Into<String>) -> Self {
        Self::MalformedValue {
            field: field.to_string(),
            detail: detail.into(),
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
