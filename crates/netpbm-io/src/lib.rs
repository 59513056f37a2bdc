//! netpbm-io - Image I/O for the Netpbm family
//!
//! Decodes and encodes all six Netpbm variants (`P1`..`P6`). Only this crate
//! touches the filesystem; everything else in the workspace works on
//! in-memory [`Pix`] values.
//!
//! # Reading
//!
//! ```
//! use netpbm_io::read_image_mem;
//!
//! let pix = read_image_mem(b"P1\n2 2\n1 0\n0 1\n").unwrap();
//! assert_eq!(pix.size(), (2, 2));
//! ```
//!
//! # Writing
//!
//! [`write_image`] encodes the whole image in memory first and then
//! replaces the destination by renaming a temporary sibling file, so a
//! failed write never leaves a partial file behind.

pub mod error;
pub mod format;
pub mod header;
pub mod limits;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use header::{PnmHeader, read_image_header, read_image_header_mem};
pub use limits::{Limits, ReadOptions};
pub use netpbm_core::MagicNumber;

use netpbm_core::Pix;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Read an image from a file
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    read_image_with_options(path, &ReadOptions::default())
}

/// Read an image from a file with decode options
pub fn read_image_with_options<P: AsRef<Path>>(path: P, options: &ReadOptions) -> IoResult<Pix> {
    let path = path.as_ref();
    log::debug!("read_image: {}", path.display());
    let data = fs::read(path)?;
    pnm::decode_pnm(&data, options)
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    read_image_mem_with_options(data, &ReadOptions::default())
}

/// Read an image from memory with decode options
pub fn read_image_mem_with_options(data: &[u8], options: &ReadOptions) -> IoResult<Pix> {
    pnm::decode_pnm(data, options)
}

/// Encode an image to memory
///
/// Use `pix.magic_number()` to keep the encoding the image was read with.
pub fn write_image_mem(pix: &Pix, magic: MagicNumber) -> IoResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    pnm::write_pnm(pix, magic, &mut buffer)?;
    Ok(buffer.into_inner())
}

/// Write an image to a file
///
/// The image is fully encoded before the filesystem is touched. The bytes
/// go to a temporary file next to `path`, which is then renamed over
/// `path`; on any failure the temporary file is removed and `path` is left
/// as it was.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, magic: MagicNumber) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = write_image_mem(pix, magic)?;
    log::debug!(
        "write_image: {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        magic
    );

    let tmp = temp_sibling(path);
    let result = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(IoError::Io(e));
    }
    Ok(())
}

/// Temporary file name in the same directory as `path`.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
