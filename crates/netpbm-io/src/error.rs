//! I/O error types
//!
//! Provides a unified error type for all decode/encode operations.
//! Header and payload failures are reported with their own variants;
//! errors raised while building the in-memory image are wrapped from
//! `netpbm-core`.

use netpbm_core::ErrorKind;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The first header token is not one of `P1`..`P6`
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed, non-positive or over-limit header field, or an encode
    /// request whose magic number does not match the image
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The payload holds fewer samples than the header declared
    #[error("truncated payload: expected {expected} samples, found {found}")]
    TruncatedPayload { expected: usize, found: usize },

    /// A payload sample lies outside `[0, max_value]`
    #[error("pixel value {value} out of range [0, {max_value}]")]
    PixelOutOfRange { value: i64, max_value: u16 },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),
}

impl IoError {
    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IoError::Io(_) => ErrorKind::IoFailure,
            IoError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            IoError::InvalidHeader(_) => ErrorKind::InvalidHeader,
            IoError::TruncatedPayload { .. } => ErrorKind::TruncatedPayload,
            IoError::PixelOutOfRange { .. } => ErrorKind::PixelOutOfRange,
            IoError::Core(e) => e.kind(),
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
