//! netpbm-core - Pixel buffer, conversion and drawing for the Netpbm family
//!
//! This crate provides the fundamental data structures used throughout the
//! netpbm-rs workspace:
//!
//! - [`Pix`] - The image container (bitmap, graymap or pixmap)
//! - [`Pixel`] - A single gray or RGB value
//! - [`Point`] - Integer coordinates for the drawing primitives
//! - [`MagicNumber`] / [`PixelKind`] - Netpbm variants and image families
//!
//! Kind conversions live in [`pix::convert`] and drawing primitives in
//! [`pix::graphics`]. Decoding and encoding are provided by `netpbm-io`,
//! geometric transforms and resampling by `netpbm-transform`.

pub mod error;
pub mod pix;
pub mod point;

pub use error::{Error, ErrorKind, Result};
pub use pix::graphics::{
    generate_box_pts, generate_disk_pts, generate_line_pts, generate_polyline_pts,
};
pub use pix::{MagicNumber, Pix, Pixel, PixelKind};
pub use point::Point;
