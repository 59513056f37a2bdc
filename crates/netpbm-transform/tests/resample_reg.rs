//! Resampling regression test
//!
//! Covers the quadrant downscale, neighborhood averaging, every pixel
//! kind, and the rejection of non-positive targets.

use netpbm_core::{ErrorKind, MagicNumber, Pixel};
use netpbm_test::{RegParams, patterns};
use netpbm_transform::{ResampleOptions, resample, resample_in_place, resample_with_options};

fn luma(p: Option<Pixel>) -> u32 {
    p.map(|p| u32::from(p.luma(u16::MAX))).unwrap_or(0)
}

#[test]
fn resample_reg() {
    let mut rp = RegParams::new("resample");

    // 4x4 pixmap, white 2x2 top-left block, down to 2x2 with k = 1
    let pix = patterns::quadrant(4, 4, 2, 2, 255);
    let out = resample(&pix, 2, 2, 1).expect("resample quadrant");
    rp.compare_values(2.0, out.width() as f64, 0.0);
    rp.compare_values(2.0, out.height() as f64, 0.0);
    let whiter = luma(out.get_pixel(0, 0)) > luma(out.get_pixel(1, 1));
    rp.compare_values(1.0, if whiter { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if out.get_pixel(0, 0) == Some(Pixel::rgb(255, 255, 255)) { 1.0 } else { 0.0 }, 0.0);
    rp.write_pix(&out, MagicNumber::P6).expect("write quadrant");

    // a 3x3 neighborhood over a 2x2 block in 4x4 still favors the corner
    let smooth = resample(&pix, 2, 2, 3).expect("resample k=3");
    // (0,0) averages the 2x2 top-left corner; (1,1) averages 3x3 around (2,2)
    rp.compare_values(1.0, if smooth.get_pixel(0, 0) == Some(Pixel::rgb(255, 255, 255)) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if smooth.get_pixel(1, 1) == Some(Pixel::rgb(28, 28, 28)) { 1.0 } else { 0.0 }, 0.0);

    // each kind keeps its kind, maximum value and magic number
    for src in [
        patterns::checkerboard(9, 9, 3),
        patterns::gradient(12, 6, 1023),
        patterns::color_ramp(5, 5, 255),
    ] {
        let out = resample_with_options(&src, &ResampleOptions::with_size(7, 3).neighborhood(2))
            .expect("resample");
        rp.compare_values(7.0, out.width() as f64, 0.0);
        rp.compare_values(3.0, out.height() as f64, 0.0);
        rp.compare_values(src.max_value() as f64, out.max_value() as f64, 0.0);
        let same_kind = out.kind() == src.kind() && out.magic_number() == src.magic_number();
        rp.compare_values(1.0, if same_kind { 1.0 } else { 0.0 }, 0.0);
        let in_range = out.samples().iter().all(|&v| v <= out.max_value());
        rp.compare_values(1.0, if in_range { 1.0 } else { 0.0 }, 0.0);
    }

    // nearest-neighbor upscale by 2 then downscale by 2 is the identity
    let gray = patterns::gradient(6, 4, 255);
    let mut pix2 = gray.clone();
    resample_in_place(&mut pix2, 12, 8, 1).expect("upscale");
    resample_in_place(&mut pix2, 6, 4, 1).expect("downscale");
    rp.compare_pix(&gray, &pix2);

    assert!(rp.cleanup(), "resample regression test failed");
}

#[test]
fn resample_errors_reg() {
    let mut rp = RegParams::new("resample_errors");

    let pix = patterns::gradient(4, 4, 255);
    for (w, h) in [(0, 4), (4, 0), (-1, -1), (i32::MIN, 3)] {
        let err = resample(&pix, w, h, 1).unwrap_err();
        rp.compare_values(1.0, if err.kind() == ErrorKind::InvalidDimensions { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "resample errors regression test failed");
}
