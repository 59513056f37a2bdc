//! netpbm-test - Regression test framework for netpbm-rs
//!
//! This crate provides the regression harness used by the `tests/*_reg.rs`
//! files of every crate in the workspace, supporting two modes:
//!
//! - **Compare**: images written with [`RegParams::write_pix`] must decode
//!   back unchanged (default)
//! - **Display**: images are written for inspection only
//!
//! Test images are built in code by [`patterns`]; no fixture files are
//! needed.
//!
//! # Usage
//!
//! ```ignore
//! use netpbm_test::{RegParams, patterns};
//!
//! let mut rp = RegParams::new("pnmio");
//! let pix = patterns::gradient(8, 8, 255);
//! rp.compare_values(8.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod patterns;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use netpbm_core::{MagicNumber, PixelKind};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // netpbm-test is at crates/netpbm-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Conventional file extension for a Netpbm variant
pub fn extension(magic: MagicNumber) -> &'static str {
    match magic.kind() {
        PixelKind::Bitmap => "pbm",
        PixelKind::Graymap => "pgm",
        PixelKind::Pixmap => "ppm",
    }
}
