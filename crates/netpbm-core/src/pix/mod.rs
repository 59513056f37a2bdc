//! PIX - The main image container
//!
//! `Pix` is the in-memory raster every other part of the workspace works on:
//! decoders produce one, transforms and drawing primitives mutate one, and
//! encoders serialize one.
//!
//! # Pixel layout
//!
//! - Samples are stored in a single `Vec<u16>`, row-major, top row first
//! - Bitmaps and graymaps carry one sample per pixel, pixmaps carry three
//!   (R, G, B), stored independently with no alpha
//! - Every sample satisfies `0 <= v <= max_value`
//! - Bitmaps always have `max_value == 1`; sample `1` is the foreground
//!
//! # Ownership model
//!
//! A `Pix` is exclusively owned by whoever holds it. `Clone` is a deep copy
//! and mutation always goes through `&mut Pix`, so no internal
//! synchronization is needed.

mod access;
pub mod convert;
pub mod graphics;
mod ops;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Netpbm image family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// 1 channel, boolean samples (`max_value` is always 1)
    Bitmap,
    /// 1 channel, `0..=max_value`
    Graymap,
    /// 3 channels (R, G, B), each `0..=max_value`
    Pixmap,
}

impl PixelKind {
    /// Number of samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelKind::Bitmap | PixelKind::Graymap => 1,
            PixelKind::Pixmap => 3,
        }
    }

    /// Text-encoding magic number for this kind.
    pub fn ascii_magic(self) -> MagicNumber {
        match self {
            PixelKind::Bitmap => MagicNumber::P1,
            PixelKind::Graymap => MagicNumber::P2,
            PixelKind::Pixmap => MagicNumber::P3,
        }
    }

    /// Binary-encoding magic number for this kind.
    pub fn binary_magic(self) -> MagicNumber {
        self.ascii_magic().binary()
    }
}

/// The two-character token identifying a Netpbm variant.
///
/// Encodes both the image family and the payload encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagicNumber {
    /// Bitmap, text payload
    P1,
    /// Graymap, text payload
    P2,
    /// Pixmap, text payload
    P3,
    /// Bitmap, packed binary payload
    P4,
    /// Graymap, binary payload
    P5,
    /// Pixmap, binary payload
    P6,
}

impl MagicNumber {
    /// All supported magic numbers, in numeric order.
    pub const ALL: [MagicNumber; 6] = [
        MagicNumber::P1,
        MagicNumber::P2,
        MagicNumber::P3,
        MagicNumber::P4,
        MagicNumber::P5,
        MagicNumber::P6,
    ];

    /// Parse a magic number token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything other than
    /// `P1`..`P6`.
    pub fn parse(token: &[u8]) -> Result<Self> {
        match token {
            b"P1" => Ok(MagicNumber::P1),
            b"P2" => Ok(MagicNumber::P2),
            b"P3" => Ok(MagicNumber::P3),
            b"P4" => Ok(MagicNumber::P4),
            b"P5" => Ok(MagicNumber::P5),
            b"P6" => Ok(MagicNumber::P6),
            other => Err(Error::UnsupportedFormat(format!(
                "unrecognized magic number {:?}",
                String::from_utf8_lossy(other)
            ))),
        }
    }

    /// The token as written in a file header.
    pub fn as_str(self) -> &'static str {
        match self {
            MagicNumber::P1 => "P1",
            MagicNumber::P2 => "P2",
            MagicNumber::P3 => "P3",
            MagicNumber::P4 => "P4",
            MagicNumber::P5 => "P5",
            MagicNumber::P6 => "P6",
        }
    }

    /// Image family this magic number declares.
    pub fn kind(self) -> PixelKind {
        match self {
            MagicNumber::P1 | MagicNumber::P4 => PixelKind::Bitmap,
            MagicNumber::P2 | MagicNumber::P5 => PixelKind::Graymap,
            MagicNumber::P3 | MagicNumber::P6 => PixelKind::Pixmap,
        }
    }

    /// Whether the payload is binary (P4/P5/P6).
    pub fn is_binary(self) -> bool {
        matches!(self, MagicNumber::P4 | MagicNumber::P5 | MagicNumber::P6)
    }

    /// Whether the header carries a maximum-value field.
    pub fn has_max_value(self) -> bool {
        self.kind() != PixelKind::Bitmap
    }

    /// Text counterpart (`P4` -> `P1`, ...).
    pub fn ascii(self) -> Self {
        match self {
            MagicNumber::P4 => MagicNumber::P1,
            MagicNumber::P5 => MagicNumber::P2,
            MagicNumber::P6 => MagicNumber::P3,
            text => text,
        }
    }

    /// Binary counterpart (`P1` -> `P4`, ...).
    pub fn binary(self) -> Self {
        match self {
            MagicNumber::P1 => MagicNumber::P4,
            MagicNumber::P2 => MagicNumber::P5,
            MagicNumber::P3 => MagicNumber::P6,
            binary => binary,
        }
    }
}

impl fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagicNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MagicNumber::parse(s.trim().to_ascii_uppercase().as_bytes())
    }
}

/// A single pixel value.
///
/// Mono buffers (bitmap, graymap) read back as `Gray`; pixmaps read back as
/// `Rgb`. Either variant may be written to any buffer, see
/// [`Pix::set_pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Single channel value
    Gray(u16),
    /// Red, green, blue
    Rgb(u16, u16, u16),
}

impl Pixel {
    /// Create an RGB pixel.
    pub const fn rgb(r: u16, g: u16, b: u16) -> Self {
        Pixel::Rgb(r, g, b)
    }

    /// Create a single-channel pixel.
    pub const fn gray(v: u16) -> Self {
        Pixel::Gray(v)
    }

    /// Bitmap value: `true` is the foreground (`1`).
    pub const fn bit(on: bool) -> Self {
        Pixel::Gray(on as u16)
    }

    /// Perceptual brightness, `floor(0.299 R + 0.587 G + 0.114 B)`,
    /// computed exactly in integer arithmetic and
    /// clamped to `max_value`. A `Gray` pixel is its own luma.
    pub fn luma(self, max_value: u16) -> u16 {
        match self {
            Pixel::Gray(v) => v.min(max_value),
            Pixel::Rgb(r, g, b) => {
                // Fixed-point weights in thousandths keep the floor exact.
                let l = (299 * u64::from(r) + 587 * u64::from(g) + 114 * u64::from(b)) / 1000;
                l.min(u64::from(max_value)) as u16
            }
        }
    }

    /// The three channels; a `Gray` value is replicated.
    pub fn to_rgb(self) -> (u16, u16, u16) {
        match self {
            Pixel::Gray(v) => (v, v, v),
            Pixel::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// Largest channel value.
    pub fn max_channel(self) -> u16 {
        match self {
            Pixel::Gray(v) => v,
            Pixel::Rgb(r, g, b) => r.max(g).max(b),
        }
    }
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use netpbm_core::{Pix, Pixel};
///
/// let mut pix = Pix::new_pixmap(4, 3, 255).unwrap();
/// pix.set_pixel(1, 2, Pixel::rgb(255, 0, 0)).unwrap();
/// assert_eq!(pix.size(), (4, 3));
/// assert_eq!(pix.get_pixel(1, 2), Some(Pixel::rgb(255, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Declared maximum sample value
    max_value: u16,
    /// Image family
    kind: PixelKind,
    /// Preferred encoding when the buffer is written out
    magic: MagicNumber,
    /// Samples, row-major, `channels` per pixel
    data: Vec<u16>,
}

impl Pix {
    /// Create a new PIX with every sample set to zero.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `max_value` - Declared maximum sample value (must be > 0;
    ///   must be 1 for bitmaps)
    /// * `kind` - Image family
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0, and
    /// [`Error::InvalidHeader`] for an unusable `max_value`.
    pub fn new(width: u32, height: u32, max_value: u16, kind: PixelKind) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        check_max_value(kind, max_value)?;

        let len = Self::sample_count(width, height, kind)?;
        Ok(Pix {
            width,
            height,
            max_value,
            kind,
            magic: kind.ascii_magic(),
            data: vec![0u16; len],
        })
    }

    /// Create a bitmap with every pixel set to background (`false`).
    pub fn new_bitmap(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, 1, PixelKind::Bitmap)
    }

    /// Create a black graymap.
    pub fn new_graymap(width: u32, height: u32, max_value: u16) -> Result<Self> {
        Self::new(width, height, max_value, PixelKind::Graymap)
    }

    /// Create a black pixmap.
    pub fn new_pixmap(width: u32, height: u32, max_value: u16) -> Result<Self> {
        Self::new(width, height, max_value, PixelKind::Pixmap)
    }

    /// Create a PIX from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedPayload`] if `samples` does not hold exactly
    /// `width * height * channels` values and [`Error::PixelOutOfRange`] if
    /// any sample exceeds `max_value`.
    pub fn from_samples(
        width: u32,
        height: u32,
        max_value: u16,
        kind: PixelKind,
        samples: Vec<u16>,
    ) -> Result<Self> {
        let mut pix = Self::new(width, height, max_value, kind)?;
        if samples.len() != pix.data.len() {
            return Err(Error::TruncatedPayload {
                expected: pix.data.len(),
                found: samples.len(),
            });
        }
        if let Some(&bad) = samples.iter().find(|&&v| v > max_value) {
            return Err(Error::PixelOutOfRange {
                value: i64::from(bad),
                max_value,
            });
        }
        pix.data = samples;
        Ok(pix)
    }

    /// Create a blank PIX with the same dimensions, kind and maximum value.
    pub fn create_template(&self) -> Self {
        Pix {
            width: self.width,
            height: self.height,
            max_value: self.max_value,
            kind: self.kind,
            magic: self.magic,
            data: vec![0u16; self.data.len()],
        }
    }

    /// Number of samples for the given geometry, guarding against overflow.
    fn sample_count(width: u32, height: u32, kind: PixelKind) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(kind.channels()))
            .ok_or_else(|| {
                Error::InvalidParameter(format!("image too large: {width}x{height}"))
            })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the declared maximum sample value.
    #[inline]
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// Get the image family.
    #[inline]
    pub fn kind(&self) -> PixelKind {
        self.kind
    }

    /// Samples per pixel (1 or 3).
    #[inline]
    pub fn channels(&self) -> usize {
        self.kind.channels()
    }

    /// The magic number used when no explicit one is requested on write.
    #[inline]
    pub fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.data
    }

    /// Samples of scanline `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u16] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Mutable samples of scanline `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u16] {
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Samples per scanline.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels()
    }

    /// Check if two PIX have the same width, height and kind.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width == other.width && self.height == other.height && self.kind == other.kind
    }

    /// Replace geometry and samples in one step.
    ///
    /// Used by transforms that cannot work in place (non-square rotation,
    /// resampling). Kind, maximum value and magic number are kept. The
    /// caller guarantees that every sample is at most `max_value`.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero or `samples` does not hold exactly
    /// `width * height * channels` values.
    pub fn replace_samples(&mut self, width: u32, height: u32, samples: Vec<u16>) {
        assert!(
            width > 0 && height > 0,
            "invalid image dimensions: {width}x{height}"
        );
        assert_eq!(
            samples.len(),
            width as usize * height as usize * self.channels(),
            "sample count does not match {width}x{height}"
        );
        debug_assert!(samples.iter().all(|&v| v <= self.max_value));
        self.width = width;
        self.height = height;
        self.data = samples;
    }

    /// Set the preferred output magic number.
    ///
    /// Any text or binary variant of the buffer's own kind is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if `magic` declares a different
    /// image family (for example `P3` on a graymap).
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<()> {
        if magic.kind() != self.kind {
            return Err(Error::InvalidHeader(format!(
                "magic number {magic} does not match a {:?} buffer",
                self.kind
            )));
        }
        self.magic = magic;
        Ok(())
    }

    /// Write image metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl std::io::Write, label: Option<&str>) -> Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Pix Info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, kind = {:?}, channels = {}",
            self.width,
            self.height,
            self.kind,
            self.channels()
        )?;
        writeln!(
            writer,
            "    max value = {}, magic = {}",
            self.max_value, self.magic
        )?;
        Ok(())
    }
}

impl PartialEq for Pix {
    /// Two buffers are equal when dimensions, kind, maximum value and every
    /// sample match. The preferred magic number is an encoding hint and does
    /// not take part.
    fn eq(&self, other: &Self) -> bool {
        self.sizes_equal(other) && self.max_value == other.max_value && self.data == other.data
    }
}

impl Eq for Pix {}

/// Validate a maximum value for the given kind.
pub(crate) fn check_max_value(kind: PixelKind, max_value: u16) -> Result<()> {
    if max_value == 0 {
        return Err(Error::InvalidHeader(
            "maximum value must be positive".to_string(),
        ));
    }
    if kind == PixelKind::Bitmap && max_value != 1 {
        return Err(Error::InvalidHeader(format!(
            "bitmap maximum value is fixed at 1, got {max_value}"
        )));
    }
    Ok(())
}
