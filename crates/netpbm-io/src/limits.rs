//! Decode limits
//!
//! Header dimensions are checked against [`Limits`] before any payload
//! buffer is allocated, so a hostile header cannot force a huge
//! allocation. All fields default to `None` (no limit).

use crate::{IoError, IoResult};

/// Resource limits for decode operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum width in pixels
    pub max_width: Option<u32>,
    /// Maximum height in pixels
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height)
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// No limits.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the maximum width
    pub fn max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the maximum height
    pub fn max_height(mut self, height: u32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Set the maximum pixel count
    pub fn max_pixels(mut self, pixels: u64) -> Self {
        self.max_pixels = Some(pixels);
        self
    }

    /// Check dimensions against the limits.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidHeader`] naming the first limit exceeded.
    pub fn check(&self, width: u32, height: u32) -> IoResult<()> {
        if let Some(max_w) = self.max_width
            && width > max_w
        {
            return Err(IoError::InvalidHeader(format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height
            && height > max_h
        {
            return Err(IoError::InvalidHeader(format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(IoError::InvalidHeader(format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }
}

/// Options for decoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Dimension limits applied before the payload is decoded
    pub limits: Limits,
}

impl ReadOptions {
    /// Create options with specific limits
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }
}
