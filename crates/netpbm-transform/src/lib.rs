//! netpbm-transform - Geometric transformations for netpbm-rs
//!
//! This crate provides the geometric operations on a [`Pix`]:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal and vertical flips
//! - Neighborhood-average resampling to an arbitrary size
//!
//! Rotations and flips are total and work in place. Resampling returns a
//! new image and fails only on a non-positive target size.
//!
//! [`Pix`]: netpbm_core::Pix

mod error;
pub mod rotate;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use rotate::{flip_lr, flip_tb, rotate_90, rotate_180, rotate_orth};
pub use scale::{ResampleOptions, resample, resample_in_place, resample_with_options};
