//! Conversion between image kinds
//!
//! All conversions return a new image and leave the source untouched.
//! The result keeps the source's encoding family: a binary source converts
//! to the binary magic number of the target kind.
//!
//! - Pixmap to graymap: luma, `floor(0.299 R + 0.587 G + 0.114 B)`
//! - Pixmap to bitmap: luma, then `L > max_value / 2`
//! - Graymap to bitmap: `v > max_value / 2`
//! - Mono to pixmap: channel replicated into R, G and B

use super::{Pix, PixelKind};

impl Pix {
    /// Convert to a graymap with the same maximum value.
    ///
    /// A pixmap is reduced to its luma. A bitmap becomes a graymap with
    /// maximum value 1. A graymap is copied.
    pub fn to_graymap(&self) -> Pix {
        let data = match self.kind {
            PixelKind::Bitmap | PixelKind::Graymap => self.data.clone(),
            PixelKind::Pixmap => self.luma_samples(),
        };
        self.converted(PixelKind::Graymap, self.max_value, data)
    }

    /// Convert to a bitmap by thresholding at `max_value / 2`.
    ///
    /// A pixel becomes foreground iff its value (luma for a pixmap) is
    /// strictly greater than `floor(max_value / 2)`. A bitmap is copied.
    pub fn to_bitmap(&self) -> Pix {
        let threshold = self.max_value / 2;
        let data = match self.kind {
            PixelKind::Bitmap => self.data.clone(),
            PixelKind::Graymap => self
                .data
                .iter()
                .map(|&v| u16::from(v > threshold))
                .collect(),
            PixelKind::Pixmap => self
                .luma_samples()
                .into_iter()
                .map(|l| u16::from(l > threshold))
                .collect(),
        };
        self.converted(PixelKind::Bitmap, 1, data)
    }

    /// Convert to a pixmap with the same maximum value.
    ///
    /// Mono samples are replicated into all three channels, which is
    /// lossless. A pixmap is copied.
    pub fn to_pixmap(&self) -> Pix {
        let data = match self.kind {
            PixelKind::Pixmap => self.data.clone(),
            PixelKind::Bitmap | PixelKind::Graymap => {
                self.data.iter().flat_map(|&v| [v, v, v]).collect()
            }
        };
        self.converted(PixelKind::Pixmap, self.max_value, data)
    }

    /// Convert to any kind.
    pub fn convert_to_kind(&self, kind: PixelKind) -> Pix {
        match kind {
            PixelKind::Bitmap => self.to_bitmap(),
            PixelKind::Graymap => self.to_graymap(),
            PixelKind::Pixmap => self.to_pixmap(),
        }
    }

    /// Per-pixel luma of a pixmap.
    fn luma_samples(&self) -> Vec<u16> {
        let max = self.max_value;
        self.data
            .chunks_exact(3)
            .map(|c| super::Pixel::rgb(c[0], c[1], c[2]).luma(max))
            .collect()
    }

    fn converted(&self, kind: PixelKind, max_value: u16, data: Vec<u16>) -> Pix {
        let magic = if self.magic.is_binary() {
            kind.binary_magic()
        } else {
            kind.ascii_magic()
        };
        Pix {
            width: self.width,
            height: self.height,
            max_value,
            kind,
            magic,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{MagicNumber, Pix, PixelKind};

    fn rgb_2x1() -> Pix {
        Pix::from_samples(
            2,
            1,
            255,
            PixelKind::Pixmap,
            vec![10, 20, 30, 255, 255, 255],
        )
        .unwrap()
    }

    #[test]
    fn test_pixmap_to_graymap() {
        let src = rgb_2x1();
        let gray = src.to_graymap();
        assert_eq!(gray.kind(), PixelKind::Graymap);
        assert_eq!(gray.max_value(), 255);
        assert_eq!(gray.samples(), &[18, 255]);
        // source untouched
        assert_eq!(src.samples().len(), 6);
    }

    #[test]
    fn test_pixmap_to_bitmap_threshold() {
        // luma 127 is not above 255 / 2 = 127; luma 128 is
        let src = Pix::from_samples(
            2,
            1,
            255,
            PixelKind::Pixmap,
            vec![127, 127, 127, 128, 128, 128],
        )
        .unwrap();
        let bits = src.to_bitmap();
        assert_eq!(bits.kind(), PixelKind::Bitmap);
        assert_eq!(bits.max_value(), 1);
        assert_eq!(bits.samples(), &[0, 1]);
    }

    #[test]
    fn test_graymap_to_bitmap_threshold() {
        let src = Pix::from_samples(4, 1, 9, PixelKind::Graymap, vec![0, 4, 5, 9]).unwrap();
        assert_eq!(src.to_bitmap().samples(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_mono_to_pixmap_replicates() {
        let src = Pix::from_samples(2, 1, 1, PixelKind::Bitmap, vec![1, 0]).unwrap();
        let rgb = src.to_pixmap();
        assert_eq!(rgb.max_value(), 1);
        assert_eq!(rgb.samples(), &[1, 1, 1, 0, 0, 0]);
        assert_eq!(rgb.to_graymap().samples(), &[1, 0]);
        assert_eq!(rgb.to_bitmap(), src);
    }

    #[test]
    fn test_conversion_keeps_encoding_family() {
        let mut src = rgb_2x1();
        assert_eq!(src.to_graymap().magic_number(), MagicNumber::P2);
        src.set_magic_number(MagicNumber::P6).unwrap();
        assert_eq!(src.to_graymap().magic_number(), MagicNumber::P5);
        assert_eq!(src.to_bitmap().magic_number(), MagicNumber::P4);
        assert_eq!(
            src.convert_to_kind(PixelKind::Pixmap).magic_number(),
            MagicNumber::P6
        );
    }

    #[test]
    fn test_luma_bounds() {
        let samples: Vec<u16> = (0..30).map(|i| (i * 37 % 1001) as u16).collect();
        let src = Pix::from_samples(5, 2, 1000, PixelKind::Pixmap, samples).unwrap();
        assert!(src.to_graymap().samples().iter().all(|&v| v <= 1000));
        assert!(src.to_bitmap().samples().iter().all(|&v| v <= 1));
    }
}
