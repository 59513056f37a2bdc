//! Whole-buffer value operations
//!
//! Channel inversion and the declared-maximum setter. Both work in place
//! and touch every sample at most once.

use super::{Pix, check_max_value};
use crate::error::Result;

impl Pix {
    /// Replace every channel value `v` with `max_value - v`.
    ///
    /// Inverting twice restores the original buffer.
    pub fn invert(&mut self) {
        let max = self.max_value;
        for v in self.data.iter_mut() {
            *v = max - *v;
        }
    }

    /// Change the declared maximum value.
    ///
    /// Existing samples are *not* rescaled: a graymap at maxval 255 set to
    /// maxval 65535 keeps its numbers and therefore renders darker. Samples
    /// that exceed the new maximum are clamped to it so the buffer stays
    /// valid; that clamping is reported at `warn` level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidHeader`] for `0`, or for anything other
    /// than `1` on a bitmap.
    pub fn set_max_value(&mut self, max_value: u16) -> Result<()> {
        check_max_value(self.kind, max_value)?;
        let mut clamped = 0usize;
        for v in self.data.iter_mut() {
            if *v > max_value {
                *v = max_value;
                clamped += 1;
            }
        }
        if clamped > 0 {
            log::warn!(
                "set_max_value({}): clamped {} samples above the new maximum",
                max_value,
                clamped
            );
        }
        self.max_value = max_value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::{Pix, PixelKind};

    #[test]
    fn test_invert_graymap() {
        let mut pix = Pix::from_samples(3, 1, 10, PixelKind::Graymap, vec![0, 4, 10]).unwrap();
        pix.invert();
        assert_eq!(pix.samples(), &[10, 6, 0]);
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let samples: Vec<u16> = (0..12).map(|i| i * 20).collect();
        let orig = Pix::from_samples(2, 2, 255, PixelKind::Pixmap, samples).unwrap();
        let mut pix = orig.clone();
        pix.invert();
        assert_ne!(pix, orig);
        pix.invert();
        assert_eq!(pix, orig);
    }

    #[test]
    fn test_invert_bitmap_toggles() {
        let mut pix = Pix::from_samples(2, 1, 1, PixelKind::Bitmap, vec![1, 0]).unwrap();
        pix.invert();
        assert_eq!(pix.samples(), &[0, 1]);
    }

    #[test]
    fn test_set_max_value_keeps_samples() {
        let mut pix = Pix::from_samples(2, 1, 255, PixelKind::Graymap, vec![7, 200]).unwrap();
        pix.set_max_value(1000).unwrap();
        assert_eq!(pix.max_value(), 1000);
        assert_eq!(pix.samples(), &[7, 200]);

        pix.set_max_value(100).unwrap();
        assert_eq!(pix.samples(), &[7, 100]);
    }

    #[test]
    fn test_set_max_value_rejects() {
        let mut pix = Pix::new_graymap(1, 1, 255).unwrap();
        assert_eq!(
            pix.set_max_value(0).unwrap_err().kind(),
            ErrorKind::InvalidHeader
        );
        let mut bits = Pix::new_bitmap(1, 1).unwrap();
        assert_eq!(
            bits.set_max_value(255).unwrap_err().kind(),
            ErrorKind::InvalidHeader
        );
        bits.set_max_value(1).unwrap();
    }
}
