//! netpbm - Netpbm raster engine for Rust
//!
//! Decodes, edits and encodes PBM, PGM and PPM images in both their text
//! (`P1`-`P3`) and binary (`P4`-`P6`) variants.
//!
//! # Overview
//!
//! - In-memory raster with kind, maximum value and preferred magic number
//!   ([`Pix`])
//! - Pixel access, kind conversion, inversion and maximum-value changes
//! - Drawing primitives: lines, boxes, circles, triangles, polygons and
//!   Sierpinski triangles
//! - Codec with size limits and atomic file writes ([`io`])
//! - Orthogonal rotation, flips and resampling ([`transform`])
//!
//! # Example
//!
//! ```
//! use netpbm::{MagicNumber, Pix, Pixel, Point};
//!
//! let mut pix = Pix::new_pixmap(64, 48, 255).unwrap();
//! pix.render_filled_circle(Point::new(32, 24), 10, Pixel::rgb(255, 0, 0));
//! netpbm::transform::rotate_90(&mut pix, true);
//!
//! let bytes = netpbm::io::write_image_mem(&pix, MagicNumber::P6).unwrap();
//! let back = netpbm::io::read_image_mem(&bytes).unwrap();
//! assert_eq!(back.width(), 48);
//! assert_eq!(back, pix);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use netpbm_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use netpbm_io as io;
pub use netpbm_transform as transform;
