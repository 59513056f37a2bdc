//! PNM (Portable Any Map) format support
//!
//! Reads and writes all six Netpbm variants:
//!
//! | Magic | Kind    | Payload                                            |
//! |-------|---------|----------------------------------------------------|
//! | `P1`  | bitmap  | text, one token per pixel                          |
//! | `P2`  | graymap | text, one token per pixel                          |
//! | `P3`  | pixmap  | text, three tokens (R G B) per pixel               |
//! | `P4`  | bitmap  | packed, 8 pixels per byte MSB first, rows padded   |
//! | `P5`  | graymap | 1 byte per sample, or 2 bytes big-endian if maxval > 255 |
//! | `P6`  | pixmap  | as `P5`, three samples per pixel                   |
//!
//! Text output writes one image row per line with single spaces between
//! tokens, so `P1\n2 2\n1 0\n0 1\n` reproduces itself byte for byte.

use crate::header::{PnmHeader, Tokens, parse_header};
use crate::{IoError, IoResult, ReadOptions};
use netpbm_core::{MagicNumber, Pix, PixelKind};
use std::io::{Read, Write};

/// Read a PNM image from a reader.
///
/// The reader is consumed to the end in one bulk read before decoding.
pub fn read_pnm<R: Read>(mut reader: R, options: &ReadOptions) -> IoResult<Pix> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_pnm(&data, options)
}

/// Decode a PNM image from bytes.
///
/// The returned image remembers the magic number it was read with, so
/// writing it back with [`Pix::magic_number`] keeps the encoding.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for an unknown magic number
/// - [`IoError::InvalidHeader`] for a malformed or over-limit header
/// - [`IoError::TruncatedPayload`] when samples are missing
/// - [`IoError::PixelOutOfRange`] when a sample exceeds the maximum value
pub fn decode_pnm(data: &[u8], options: &ReadOptions) -> IoResult<Pix> {
    let header = parse_header(data)?;
    options.limits.check(header.width, header.height)?;
    let expected = checked_sample_count(&header)?;
    log::debug!(
        "decode_pnm: {} {}x{} maxval {}",
        header.magic,
        header.width,
        header.height,
        header.max_value
    );

    let samples = if header.magic.is_binary() {
        decode_binary(data, &header, expected)?
    } else {
        decode_text(data, &header, expected)?
    };

    let mut pix = Pix::from_samples(
        header.width,
        header.height,
        header.max_value,
        header.kind(),
        samples,
    )?;
    pix.set_magic_number(header.magic)?;
    Ok(pix)
}

/// `width * height * channels`, rejecting sizes that do not fit in memory.
fn checked_sample_count(header: &PnmHeader) -> IoResult<usize> {
    (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|n| n.checked_mul(header.kind().channels()))
        .ok_or_else(|| {
            IoError::InvalidHeader(format!(
                "image too large: {}x{}",
                header.width, header.height
            ))
        })
}

/// Decode whitespace-separated sample tokens (P1/P2/P3).
fn decode_text(data: &[u8], header: &PnmHeader, expected: usize) -> IoResult<Vec<u16>> {
    let mut tokens = Tokens::at(data, header.data_offset);
    // every token needs at least one digit and one separator
    let remaining = data.len().saturating_sub(header.data_offset);
    let mut samples = Vec::with_capacity(expected.min(remaining / 2 + 1));

    while samples.len() < expected {
        let found = samples.len();
        let token = tokens
            .next_token()
            .ok_or(IoError::TruncatedPayload { expected, found })?;
        let value = parse_sample(token).ok_or(IoError::TruncatedPayload { expected, found })?;
        if value < 0 || value > i64::from(header.max_value) {
            return Err(IoError::PixelOutOfRange {
                value,
                max_value: header.max_value,
            });
        }
        samples.push(value as u16);
    }
    Ok(samples)
}

/// Parse an optionally signed decimal token; magnitudes saturate.
///
/// Returns `None` for anything that is not an integer.
fn parse_sample(token: &[u8]) -> Option<i64> {
    let (negative, digits) = match token.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let magnitude = digits.iter().fold(0i64, |acc, &d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Decode a binary payload (P4/P5/P6).
fn decode_binary(data: &[u8], header: &PnmHeader, expected: usize) -> IoResult<Vec<u16>> {
    let payload = data.get(header.data_offset..).unwrap_or(&[]);
    let width = header.width as usize;
    let height = header.height as usize;

    if header.kind() == PixelKind::Bitmap {
        let row_bytes = width.div_ceil(8);
        let needed = row_bytes * height;
        if payload.len() < needed {
            return Err(IoError::TruncatedPayload {
                expected,
                found: payload.len() / row_bytes * width,
            });
        }
        let mut samples = Vec::with_capacity(expected);
        for row in payload[..needed].chunks_exact(row_bytes) {
            samples.extend((0..width).map(|x| u16::from((row[x / 8] >> (7 - x % 8)) & 1)));
        }
        return Ok(samples);
    }

    let max_value = header.max_value;
    let bytes_per_sample = bytes_per_sample(max_value);
    let needed = expected
        .checked_mul(bytes_per_sample)
        .ok_or_else(|| IoError::InvalidHeader("image too large".to_string()))?;
    if payload.len() < needed {
        return Err(IoError::TruncatedPayload {
            expected,
            found: payload.len() / bytes_per_sample,
        });
    }

    let payload = &payload[..needed];
    let samples: Vec<u16> = if bytes_per_sample == 1 {
        payload.iter().map(|&b| u16::from(b)).collect()
    } else {
        payload
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect()
    };
    if let Some(&bad) = samples.iter().find(|&&v| v > max_value) {
        return Err(IoError::PixelOutOfRange {
            value: i64::from(bad),
            max_value,
        });
    }
    Ok(samples)
}

/// Bytes per binary sample: 1 below 256, 2 (big-endian) otherwise.
fn bytes_per_sample(max_value: u16) -> usize {
    if max_value < 256 { 1 } else { 2 }
}

/// Write a `Pix` as PNM to a writer, using the given magic number.
///
/// # Errors
///
/// Returns [`IoError::InvalidHeader`] if `magic` declares a different image
/// family than `pix` (for example `P3` for a graymap), and
/// [`IoError::Io`] if the writer fails.
pub fn write_pnm<W: Write>(pix: &Pix, magic: MagicNumber, mut writer: W) -> IoResult<()> {
    if magic.kind() != pix.kind() {
        return Err(IoError::InvalidHeader(format!(
            "cannot encode a {:?} image as {}",
            pix.kind(),
            magic
        )));
    }
    log::debug!(
        "write_pnm: {} {}x{} maxval {}",
        magic,
        pix.width(),
        pix.height(),
        pix.max_value()
    );

    write!(writer, "{}\n{} {}\n", magic, pix.width(), pix.height())?;
    if magic.has_max_value() {
        writeln!(writer, "{}", pix.max_value())?;
    }

    match magic {
        MagicNumber::P1 | MagicNumber::P2 | MagicNumber::P3 => write_text(pix, &mut writer)?,
        MagicNumber::P4 => write_packed_bits(pix, &mut writer)?,
        MagicNumber::P5 | MagicNumber::P6 => write_binary_samples(pix, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

fn write_text<W: Write>(pix: &Pix, writer: &mut W) -> IoResult<()> {
    let mut line = String::with_capacity(pix.stride() * 4);
    for y in 0..pix.height() {
        line.clear();
        for (i, v) in pix.row(y).iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&v.to_string());
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}

fn write_packed_bits<W: Write>(pix: &Pix, writer: &mut W) -> IoResult<()> {
    let row_bytes = (pix.width() as usize).div_ceil(8);
    let mut packed = vec![0u8; row_bytes];
    for y in 0..pix.height() {
        packed.fill(0);
        for (x, &v) in pix.row(y).iter().enumerate() {
            if v != 0 {
                packed[x / 8] |= 0x80 >> (x % 8);
            }
        }
        writer.write_all(&packed)?;
    }
    Ok(())
}

fn write_binary_samples<W: Write>(pix: &Pix, writer: &mut W) -> IoResult<()> {
    let wide = bytes_per_sample(pix.max_value()) == 2;
    let mut bytes = Vec::with_capacity(pix.stride() * if wide { 2 } else { 1 });
    for y in 0..pix.height() {
        bytes.clear();
        for &v in pix.row(y) {
            if wide {
                bytes.extend_from_slice(&v.to_be_bytes());
            } else {
                bytes.push(v as u8);
            }
        }
        writer.write_all(&bytes)?;
    }
    Ok(())
}
