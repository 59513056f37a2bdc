//! Image format detection
//!
//! Detects the Netpbm variant from the first header token. Leading
//! whitespace and comments are skipped as in a full header parse.

use crate::header::Tokens;
use crate::{IoError, IoResult};
use netpbm_core::MagicNumber;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes read from a file when probing its format.
const PROBE_LEN: usize = 512;

/// Detect the Netpbm variant of a file
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<MagicNumber> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(PROBE_LEN);
    file.take(PROBE_LEN as u64).read_to_end(&mut head)?;
    detect_format_from_bytes(&head)
}

/// Detect the Netpbm variant from bytes
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the first token is not one of
/// `P1`..`P6` or there is no token at all.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<MagicNumber> {
    let token = Tokens::new(data)
        .next_token()
        .ok_or_else(|| IoError::UnsupportedFormat("not enough data to detect format".into()))?;
    MagicNumber::parse(token).map_err(|e| IoError::UnsupportedFormat(e.to_string()))
}
