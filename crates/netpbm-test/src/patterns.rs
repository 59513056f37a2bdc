//! Synthetic test images
//!
//! Deterministic builders for the images the regression tests work on.
//! All of them panic on invalid arguments, which is acceptable in tests.

use netpbm_core::{Pix, Pixel, PixelKind};

/// Graymap whose value grows with `x + y`, from 0 at the top-left corner
/// to `max_value` at the bottom-right corner.
pub fn gradient(width: u32, height: u32, max_value: u16) -> Pix {
    let span = u64::from((width + height).saturating_sub(2).max(1));
    let mut samples = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = u64::from(x + y) * u64::from(max_value) / span;
            samples.push(v as u16);
        }
    }
    Pix::from_samples(width, height, max_value, PixelKind::Graymap, samples)
        .expect("valid gradient")
}

/// Pixmap with a distinct color in every pixel.
///
/// Red follows `x`, green follows `y`, blue follows the pixel index, each
/// reduced modulo `max_value + 1`.
pub fn color_ramp(width: u32, height: u32, max_value: u16) -> Pix {
    let modulus = u32::from(max_value) + 1;
    let mut samples = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            samples.push(((x * 7) % modulus) as u16);
            samples.push(((y * 13) % modulus) as u16);
            samples.push(((i * 31) % modulus) as u16);
        }
    }
    Pix::from_samples(width, height, max_value, PixelKind::Pixmap, samples)
        .expect("valid color ramp")
}

/// Bitmap checkerboard with square cells of side `cell`; the top-left cell
/// is foreground.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> Pix {
    let cell = cell.max(1);
    let mut pix = Pix::new_bitmap(width, height).expect("valid checkerboard");
    for y in 0..height {
        for x in 0..width {
            let on = (x / cell + y / cell) % 2 == 0;
            pix.set_pixel_unchecked(x, y, Pixel::bit(on));
        }
    }
    pix
}

/// Black pixmap with a white `block_w` x `block_h` block in the top-left
/// corner.
pub fn quadrant(width: u32, height: u32, block_w: u32, block_h: u32, max_value: u16) -> Pix {
    let mut pix = Pix::new_pixmap(width, height, max_value).expect("valid quadrant");
    let white = Pixel::rgb(max_value, max_value, max_value);
    for y in 0..block_h.min(height) {
        for x in 0..block_w.min(width) {
            pix.set_pixel_unchecked(x, y, white);
        }
    }
    pix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_corners() {
        let pix = gradient(5, 4, 70);
        assert_eq!(pix.get_pixel(0, 0), Some(Pixel::gray(0)));
        assert_eq!(pix.get_pixel(4, 3), Some(Pixel::gray(70)));
    }

    #[test]
    fn test_checkerboard() {
        let pix = checkerboard(4, 4, 2);
        assert_eq!(pix.get_bit(0, 0), Some(true));
        assert_eq!(pix.get_bit(2, 0), Some(false));
        assert_eq!(pix.get_bit(3, 3), Some(true));
    }

    #[test]
    fn test_quadrant() {
        let pix = quadrant(4, 4, 2, 2, 255);
        assert_eq!(pix.get_pixel(1, 1), Some(Pixel::rgb(255, 255, 255)));
        assert_eq!(pix.get_pixel(2, 1), Some(Pixel::rgb(0, 0, 0)));
    }

    #[test]
    fn test_color_ramp_in_range() {
        let pix = color_ramp(9, 7, 15);
        assert!(pix.samples().iter().all(|&v| v <= 15));
    }
}
