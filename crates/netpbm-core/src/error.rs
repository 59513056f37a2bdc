//! Error types for netpbm-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Every error in the workspace maps onto an [`ErrorKind`], so callers that
//! only care about the failure category can match on `err.kind()` no matter
//! which crate produced the error.

use thiserror::Error;

/// Failure category shared by every error type in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized magic number
    UnsupportedFormat,
    /// Malformed or non-positive dimensions / maximum value, or a
    /// magic number that does not match the buffer
    InvalidHeader,
    /// Fewer payload tokens, rows or bytes than the header declared
    TruncatedPayload,
    /// Channel value outside `[0, max_value]`
    PixelOutOfRange,
    /// Non-positive target dimensions
    InvalidDimensions,
    /// Underlying read/write failure
    IoFailure,
    /// Contract violations that are not part of the codec/resample
    /// failure set (bad index, bad parameter)
    Other,
}

/// netpbm-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Magic number is not one of `P1`..`P6`
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed header field or magic/kind mismatch
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Payload ended before all declared samples were read
    #[error("truncated payload: expected {expected} samples, found {found}")]
    TruncatedPayload { expected: usize, found: usize },

    /// Sample value exceeds the declared maximum
    #[error("pixel value {value} out of range [0, {max_value}]")]
    PixelOutOfRange { value: i64, max_value: u16 },

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// Pixel coordinate outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::InvalidHeader(_) => ErrorKind::InvalidHeader,
            Error::TruncatedPayload { .. } => ErrorKind::TruncatedPayload,
            Error::PixelOutOfRange { .. } => ErrorKind::PixelOutOfRange,
            Error::InvalidDimensions { .. } => ErrorKind::InvalidDimensions,
            Error::Io(_) => ErrorKind::IoFailure,
            Error::IndexOutOfBounds { .. } | Error::InvalidParameter(_) => ErrorKind::Other,
        }
    }
}

/// Result type alias for netpbm-core operations
pub type Result<T> = std::result::Result<T, Error>;
