//! Orthogonal rotation and flips
//!
//! All operations modify the image in place and cannot fail. Rotations by
//! 90 degrees swap width and height, so they build a new sample buffer and
//! hand it to [`Pix::replace_samples`]; flips and the 180 degree rotation
//! keep the geometry.
//!
//! Index laws, for an input of size `w x h`:
//!
//! | Operation          | output `(x, y)` takes input        |
//! |--------------------|------------------------------------|
//! | `flip_lr`          | `(w - 1 - x, y)`                   |
//! | `flip_tb`          | `(x, h - 1 - y)`                   |
//! | `rotate_90` (cw)   | `(y, h - 1 - x)`, output is `h x w` |
//! | `rotate_90` (ccw)  | `(w - 1 - y, x)`, output is `h x w` |
//! | `rotate_180`       | `(w - 1 - x, h - 1 - y)`           |

use netpbm_core::Pix;

/// Rotate an image by 90-degree increments
///
/// # Arguments
/// * `pix` - Image to rotate
/// * `quads` - Number of 90-degree clockwise rotations (taken modulo 4)
pub fn rotate_orth(pix: &mut Pix, quads: u32) {
    match quads % 4 {
        1 => rotate_90(pix, true),
        2 => rotate_180(pix),
        3 => rotate_90(pix, false),
        _ => {}
    }
}

/// Rotate an image 90 degrees
///
/// # Arguments
/// * `pix` - Image to rotate
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(pix: &mut Pix, clockwise: bool) {
    let (w, h) = pix.size();
    let n = pix.channels();
    let src = pix.samples();
    let mut data = Vec::with_capacity(src.len());

    // Output is h wide and w tall.
    for oy in 0..w {
        for ox in 0..h {
            let (sx, sy) = if clockwise {
                (oy, h - 1 - ox)
            } else {
                (w - 1 - oy, ox)
            };
            let i = (sy as usize * w as usize + sx as usize) * n;
            data.extend_from_slice(&src[i..i + n]);
        }
    }

    pix.replace_samples(h, w, data);
}

/// Rotate an image 180 degrees
pub fn rotate_180(pix: &mut Pix) {
    let (w, h) = pix.size();
    let n = pix.channels();
    let data: Vec<u16> = pix
        .samples()
        .chunks_exact(n)
        .rev()
        .flatten()
        .copied()
        .collect();
    pix.replace_samples(w, h, data);
}

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr(pix: &mut Pix) {
    let n = pix.channels();
    let w = pix.width() as usize;
    for y in 0..pix.height() {
        let row = pix.row_mut(y);
        for x in 0..w / 2 {
            let mirror = w - 1 - x;
            for c in 0..n {
                row.swap(x * n + c, mirror * n + c);
            }
        }
    }
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb(pix: &mut Pix) {
    let (w, h) = pix.size();
    let data: Vec<u16> = (0..h)
        .rev()
        .flat_map(|y| pix.row(y).iter().copied())
        .collect();
    pix.replace_samples(w, h, data);
}
