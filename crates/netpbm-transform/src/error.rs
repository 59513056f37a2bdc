//! Error types for netpbm-transform

use netpbm_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),

    /// Non-positive resample target
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
}

impl TransformError {
    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Core(e) => e.kind(),
            TransformError::InvalidDimensions { .. } => ErrorKind::InvalidDimensions,
        }
    }
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
