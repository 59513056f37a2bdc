//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! Writing a [`Pixel`] whose arity differs from the buffer converts it
//! first: an RGB value written to a mono buffer is reduced to its luma, and
//! a gray value written to a pixmap is replicated into all three channels.
//! Channel values are then clamped to `max_value`, so on a bitmap any
//! non-zero value becomes the foreground. This keeps every drawing
//! primitive total.

use super::{Pix, Pixel, PixelKind};
use crate::error::{Error, Result};

impl Pix {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        let i = self.index(x, y);
        match self.kind {
            PixelKind::Bitmap | PixelKind::Graymap => Pixel::Gray(self.data[i]),
            PixelKind::Pixmap => Pixel::Rgb(self.data[i], self.data[i + 1], self.data[i + 2]),
        }
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::PixelOutOfRange`] if a channel exceeds `max_value`.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let max_channel = pixel.max_channel();
        if max_channel > self.max_value {
            return Err(Error::PixelOutOfRange {
                value: i64::from(max_channel),
                max_value: self.max_value,
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set a pixel without bounds checking.
    ///
    /// The value is converted to the buffer's arity and clamped to
    /// `max_value`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        let i = self.index(x, y);
        let samples = self.pixel_samples(pixel);
        let n = self.channels();
        self.data[i..i + n].copy_from_slice(&samples[..n]);
    }

    /// Set the pixel at (x, y) if it lies inside the buffer.
    ///
    /// Coordinates may be negative. Returns whether a pixel was written.
    #[inline]
    pub fn set_pixel_clipped(&mut self, x: i32, y: i32, pixel: Pixel) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        self.set_pixel_unchecked(x as u32, y as u32, pixel);
        true
    }

    /// Get a bitmap value at (x, y): `true` for any non-zero sample in a
    /// mono buffer, or for a non-black pixel in a pixmap.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_bit(&self, x: u32, y: u32) -> Option<bool> {
        self.get_pixel(x, y).map(|p| p.max_channel() != 0)
    }

    /// Set a bitmap value at (x, y).
    ///
    /// `true` writes the foreground: `1` in a bitmap, `max_value` in every
    /// channel otherwise; `false` writes zero.
    pub fn set_bit(&mut self, x: u32, y: u32, on: bool) -> Result<()> {
        let v = if on { self.max_value } else { 0 };
        self.set_pixel(x, y, Pixel::Gray(v))
    }

    /// Set every pixel to `pixel` (converted and clamped as for
    /// [`Pix::set_pixel_unchecked`]).
    pub fn fill(&mut self, pixel: Pixel) {
        let samples = self.pixel_samples(pixel);
        let n = self.channels();
        for chunk in self.data.chunks_exact_mut(n) {
            chunk.copy_from_slice(&samples[..n]);
        }
    }

    /// Reset every sample to zero.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Sample index of (x, y).
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * self.channels()
    }

    /// Convert a pixel into samples for this buffer.
    ///
    /// Only the first `channels()` entries are meaningful.
    pub(crate) fn pixel_samples(&self, pixel: Pixel) -> [u16; 3] {
        let max = self.max_value;
        match (self.kind, pixel) {
            (PixelKind::Pixmap, p) => {
                let (r, g, b) = p.to_rgb();
                [r.min(max), g.min(max), b.min(max)]
            }
            (PixelKind::Bitmap | PixelKind::Graymap, p) => [p.luma(max), 0, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_get_set_pixmap() {
        let mut pix = Pix::new_pixmap(4, 4, 255).unwrap();
        pix.set_pixel(3, 2, Pixel::rgb(1, 2, 3)).unwrap();
        assert_eq!(pix.get_pixel(3, 2), Some(Pixel::rgb(1, 2, 3)));
        assert_eq!(pix.get_pixel(4, 2), None);
        assert_eq!(pix.row(2)[9..12], [1, 2, 3]);
    }

    #[test]
    fn test_set_pixel_errors() {
        let mut pix = Pix::new_graymap(4, 4, 15).unwrap();
        let err = pix.set_pixel(4, 0, Pixel::gray(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        let err = pix.set_pixel(0, 0, Pixel::gray(16)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PixelOutOfRange);
    }

    #[test]
    fn test_gray_onto_pixmap_replicates() {
        let mut pix = Pix::new_pixmap(2, 2, 255).unwrap();
        pix.set_pixel_unchecked(0, 0, Pixel::gray(77));
        assert_eq!(pix.get_pixel(0, 0), Some(Pixel::rgb(77, 77, 77)));
    }

    #[test]
    fn test_rgb_onto_graymap_uses_luma() {
        let mut pix = Pix::new_graymap(2, 2, 255).unwrap();
        pix.set_pixel_unchecked(1, 1, Pixel::rgb(10, 20, 30));
        assert_eq!(pix.get_pixel(1, 1), Some(Pixel::gray(18)));
    }

    #[test]
    fn test_bits() {
        let mut pix = Pix::new_bitmap(3, 1).unwrap();
        pix.set_bit(1, 0, true).unwrap();
        assert_eq!(pix.get_bit(0, 0), Some(false));
        assert_eq!(pix.get_bit(1, 0), Some(true));
        assert_eq!(pix.get_pixel(1, 0), Some(Pixel::gray(1)));
    }

    #[test]
    fn test_clipped_write() {
        let mut pix = Pix::new_graymap(2, 2, 255).unwrap();
        assert!(!pix.set_pixel_clipped(-1, 0, Pixel::gray(9)));
        assert!(!pix.set_pixel_clipped(0, 2, Pixel::gray(9)));
        assert!(pix.set_pixel_clipped(1, 1, Pixel::gray(9)));
        assert_eq!(pix.samples(), &[0, 0, 0, 9]);
    }

    #[test]
    fn test_fill() {
        let mut pix = Pix::new_pixmap(2, 1, 100).unwrap();
        pix.fill(Pixel::rgb(5, 200, 7));
        assert_eq!(pix.samples(), &[5, 100, 7, 5, 100, 7]);
    }
}
