//! Image header reading
//!
//! Provides metadata extraction from Netpbm data without decoding pixel
//! data. The header is read in four fixed stages:
//!
//! 1. magic number (`P1`..`P6`)
//! 2. width and height
//! 3. maximum value (skipped for `P1`/`P4`, whose maximum is 1)
//! 4. the payload offset
//!
//! Whitespace and `#` comments may appear between any two tokens. A `#`
//! runs to the end of its line, so both whole-line and trailing comments
//! are skipped.

use crate::{IoError, IoResult};
use netpbm_core::{MagicNumber, PixelKind};
use std::fs;
use std::path::Path;

/// Image metadata read without decoding pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    /// Netpbm variant
    pub magic: MagicNumber,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Declared maximum sample value (1 for bitmaps)
    pub max_value: u16,
    /// Byte offset where the payload starts
    pub data_offset: usize,
}

impl PnmHeader {
    /// Image family declared by the magic number
    pub fn kind(&self) -> PixelKind {
        self.magic.kind()
    }

    /// Number of samples the payload must hold
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.kind().channels()
    }
}

/// Read image metadata from a file path without decoding pixel data
pub fn read_image_header<P: AsRef<Path>>(path: P) -> IoResult<PnmHeader> {
    let data = fs::read(path)?;
    read_image_header_mem(&data)
}

/// Read image metadata from bytes without decoding pixel data
pub fn read_image_header_mem(data: &[u8]) -> IoResult<PnmHeader> {
    parse_header(data)
}

/// Parse the four header stages.
pub(crate) fn parse_header(data: &[u8]) -> IoResult<PnmHeader> {
    let mut tokens = Tokens::new(data);

    let magic_token = tokens
        .next_token()
        .ok_or_else(|| IoError::UnsupportedFormat("missing magic number".to_string()))?;
    let magic = MagicNumber::parse(magic_token)
        .map_err(|_| IoError::UnsupportedFormat(describe_token(magic_token)))?;
    log::trace!("header: magic {}", magic);

    let width = tokens.next_header_field("width")?;
    let height = tokens.next_header_field("height")?;
    log::trace!("header: dimensions {}x{}", width, height);

    let max_value = if magic.has_max_value() {
        let max = tokens.next_header_field("maximum value")?;
        u16::try_from(max).map_err(|_| {
            IoError::InvalidHeader(format!("maximum value {max} exceeds 65535"))
        })?
    } else {
        1
    };
    log::trace!("header: maximum value {}", max_value);

    let data_offset = if magic.is_binary() {
        // Exactly one whitespace byte separates the header from the payload.
        match data.get(tokens.pos) {
            Some(b) if b.is_ascii_whitespace() => tokens.pos + 1,
            Some(_) => {
                return Err(IoError::InvalidHeader(
                    "expected whitespace before binary payload".to_string(),
                ));
            }
            None => tokens.pos,
        }
    } else {
        tokens.pos
    };

    Ok(PnmHeader {
        magic,
        width,
        height,
        max_value,
        data_offset,
    })
}

/// Printable form of a rejected token.
fn describe_token(token: &[u8]) -> String {
    let shown: String = String::from_utf8_lossy(token).chars().take(16).collect();
    format!("unrecognized magic number {shown:?}")
}

/// Whitespace/comment separated token reader over a byte slice.
pub(crate) struct Tokens<'a> {
    data: &'a [u8],
    pub(crate) pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Start reading at `pos`.
    pub(crate) fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    /// Skip whitespace and comments.
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Next token, or `None` at end of data.
    pub(crate) fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let data = self.data;
        let start = self.pos;
        while let Some(&b) = data.get(self.pos) {
            if b.is_ascii_whitespace() || b == b'#' {
                break;
            }
            self.pos += 1;
        }
        if self.pos > start {
            Some(&data[start..self.pos])
        } else {
            None
        }
    }

    /// Next token as a positive header integer.
    fn next_header_field(&mut self, field: &str) -> IoResult<u32> {
        let token = self
            .next_token()
            .ok_or_else(|| IoError::InvalidHeader(format!("missing {field}")))?;
        let value = std::str::from_utf8(token)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| {
                IoError::InvalidHeader(format!(
                    "{field} is not a positive integer: {:?}",
                    String::from_utf8_lossy(token)
                ))
            })?;
        if value == 0 {
            return Err(IoError::InvalidHeader(format!("{field} must be positive")));
        }
        Ok(value)
    }
}
