//! Neighborhood-average resampling
//!
//! Each output pixel `(x, y)` maps to the source pixel
//! `(floor(x * w / new_w), floor(y * h / new_h))`. The result is the
//! per-channel mean, truncated toward zero, of the source pixels whose
//! offsets from that position lie in `-k/2..=k/2` on both axes. Offsets
//! that leave the image are skipped, so border pixels average fewer
//! samples. With `k` of 0 or 1 this is plain nearest-neighbor sampling.

use crate::{TransformError, TransformResult};
use netpbm_core::Pix;

/// Parameters for [`resample_with_options`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleOptions {
    /// Target width
    pub width: i32,
    /// Target height
    pub height: i32,
    /// Neighborhood size; offsets run from `-k/2` to `k/2`
    pub neighborhood: u32,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            neighborhood: 1,
        }
    }
}

impl ResampleOptions {
    /// Create options for a target size with a 1x1 neighborhood
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the neighborhood size
    pub fn neighborhood(mut self, k: u32) -> Self {
        self.neighborhood = k;
        self
    }
}

/// Resample an image to a new size
///
/// # Arguments
/// * `pix` - Input image
/// * `new_width` - Target width, must be positive
/// * `new_height` - Target height, must be positive
/// * `k` - Neighborhood size
///
/// # Returns
/// A new image of the same kind, maximum value and magic number.
pub fn resample(pix: &Pix, new_width: i32, new_height: i32, k: u32) -> TransformResult<Pix> {
    if new_width <= 0 || new_height <= 0 {
        return Err(TransformError::InvalidDimensions {
            width: i64::from(new_width),
            height: i64::from(new_height),
        });
    }
    let (nw, nh) = (new_width as u32, new_height as u32);
    let (w, h) = pix.size();
    let n = pix.channels();
    let half = i64::from(k / 2);

    log::debug!(
        "resample: {}x{} -> {}x{}, neighborhood {}",
        w,
        h,
        nw,
        nh,
        k
    );

    let src = pix.samples();
    let (wi, hi) = (i64::from(w), i64::from(h));
    let mut data = Vec::with_capacity(nw as usize * nh as usize * n);
    let mut sums = [0u64; 3];

    for y in 0..nh {
        let sy = (u64::from(y) * u64::from(h) / u64::from(nh)) as i64;
        let (y0, y1) = ((sy - half).max(0), (sy + half).min(hi - 1));
        for x in 0..nw {
            let sx = (u64::from(x) * u64::from(w) / u64::from(nw)) as i64;
            let (x0, x1) = ((sx - half).max(0), (sx + half).min(wi - 1));

            sums[..n].fill(0);
            for yy in y0..=y1 {
                let row = (yy * wi) as usize;
                for xx in x0..=x1 {
                    let i = (row + xx as usize) * n;
                    for c in 0..n {
                        sums[c] += u64::from(src[i + c]);
                    }
                }
            }
            // (sx, sy) is always inside, so count >= 1
            let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as u64;
            data.extend(sums[..n].iter().map(|&s| (s / count) as u16));
        }
    }

    let mut out = Pix::from_samples(nw, nh, pix.max_value(), pix.kind(), data)?;
    out.set_magic_number(pix.magic_number())?;
    Ok(out)
}

/// Resample an image using [`ResampleOptions`]
pub fn resample_with_options(pix: &Pix, options: &ResampleOptions) -> TransformResult<Pix> {
    resample(pix, options.width, options.height, options.neighborhood)
}

/// Resample an image, replacing it with the result
///
/// On error the image is left unchanged.
pub fn resample_in_place(
    pix: &mut Pix,
    new_width: i32,
    new_height: i32,
    k: u32,
) -> TransformResult<()> {
    *pix = resample(pix, new_width, new_height, k)?;
    Ok(())
}
