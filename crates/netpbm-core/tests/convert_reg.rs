//! Kind conversion and value operation regression test
//!
//! # Test summary
//! - pixmap -> graymap -> bitmap chain on a color ramp
//! - mono -> pixmap replication is lossless
//! - conversions keep the text or binary encoding family
//! - invert is an involution on every kind
//! - set_max_value keeps samples and clamps the ones above the new maximum

use netpbm_core::{ErrorKind, MagicNumber, Pix, PixelKind};
use netpbm_io::{read_image_mem, write_image_mem};
use netpbm_test::{RegParams, patterns};

fn flag(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}

#[test]
fn convert_reg() {
    let mut rp = RegParams::new("convert");

    let rgb = patterns::color_ramp(12, 8, 255);
    let gray = rgb.to_graymap();
    rp.compare_values(1.0, flag(gray.kind() == PixelKind::Graymap), 0.0);
    rp.compare_values(255.0, gray.max_value() as f64, 0.0);
    let luma_ok = (0..8).all(|y| {
        (0..12).all(|x| {
            let expected = rgb.get_pixel(x, y).map(|p| p.luma(255));
            gray.get_pixel(x, y).map(|p| p.luma(255)) == expected
        })
    });
    rp.compare_values(1.0, flag(luma_ok), 0.0);
    rp.write_pix(&gray, MagicNumber::P5).expect("write gray");

    // thresholding the luma directly matches thresholding the graymap
    let bits = rgb.to_bitmap();
    rp.compare_pix(&bits, &gray.to_bitmap());
    rp.compare_values(1.0, bits.max_value() as f64, 0.0);
    rp.write_pix(&bits, MagicNumber::P4).expect("write bits");

    // mono -> pixmap -> mono is lossless
    let ramp = patterns::gradient(9, 9, 1023);
    let back = ramp.to_pixmap().to_graymap();
    rp.compare_pix(&ramp, &back);

    let board = patterns::checkerboard(9, 9, 2);
    rp.compare_pix(&board, &board.to_pixmap().to_bitmap());
    rp.compare_pix(&board, &board.to_graymap().to_bitmap());

    // convert_to_kind agrees with the named conversions
    for kind in [PixelKind::Bitmap, PixelKind::Graymap, PixelKind::Pixmap] {
        let converted = rgb.convert_to_kind(kind);
        rp.compare_values(1.0, flag(converted.kind() == kind), 0.0);
        rp.compare_values(1.0, flag(converted.magic_number() == kind.ascii_magic()), 0.0);
    }

    assert!(rp.cleanup(), "convert regression test failed");
}

#[test]
fn convert_encoding_family_reg() {
    let mut rp = RegParams::new("convert_family");

    // a file decoded from a binary variant converts to a binary variant
    let bytes = write_image_mem(&patterns::color_ramp(4, 4, 255), MagicNumber::P6).expect("encode");
    let rgb = read_image_mem(&bytes).expect("decode");
    let gray = rgb.to_graymap();
    rp.compare_values(1.0, flag(gray.magic_number() == MagicNumber::P5), 0.0);
    let bits = rgb.to_bitmap();
    rp.compare_values(1.0, flag(bits.magic_number() == MagicNumber::P4), 0.0);

    // and re-encodes under its own magic number
    let encoded = write_image_mem(&gray, gray.magic_number()).expect("encode gray");
    rp.compare_values(1.0, flag(encoded.starts_with(b"P5\n")), 0.0);

    assert!(rp.cleanup(), "convert family regression test failed");
}

#[test]
fn value_ops_reg() {
    let mut rp = RegParams::new("value_ops");

    for pix in [
        patterns::checkerboard(7, 5, 1),
        patterns::gradient(7, 5, 4095),
        patterns::color_ramp(7, 5, 63),
    ] {
        let mut inv = pix.clone();
        inv.invert();
        let max = pix.max_value();
        let complement = pix
            .samples()
            .iter()
            .zip(inv.samples())
            .all(|(&a, &b)| a + b == max);
        rp.compare_values(1.0, flag(complement), 0.0);
        inv.invert();
        rp.compare_pix(&pix, &inv);
    }

    // raising the maximum keeps the numbers
    let mut gray = patterns::gradient(5, 5, 255);
    let before = gray.samples().to_vec();
    gray.set_max_value(65535).expect("raise max");
    rp.compare_values(65535.0, gray.max_value() as f64, 0.0);
    rp.compare_values(1.0, flag(gray.samples() == before.as_slice()), 0.0);

    // lowering it clamps the samples above
    gray.set_max_value(100).expect("lower max");
    let clamped = gray.samples().iter().all(|&v| v <= 100);
    rp.compare_values(1.0, flag(clamped), 0.0);
    rp.compare_values(100.0, gray.samples()[24] as f64, 0.0);
    rp.compare_values(0.0, gray.samples()[0] as f64, 0.0);
    rp.write_pix(&gray, MagicNumber::P2).expect("write clamped");

    // invalid maxima are rejected without touching the buffer
    let mut bits = Pix::new_bitmap(3, 3).expect("bitmap");
    let err = bits.set_max_value(255).unwrap_err();
    rp.compare_values(1.0, flag(err.kind() == ErrorKind::InvalidHeader), 0.0);
    let err = gray.set_max_value(0).unwrap_err();
    rp.compare_values(1.0, flag(err.kind() == ErrorKind::InvalidHeader), 0.0);
    rp.compare_values(100.0, gray.max_value() as f64, 0.0);

    assert!(rp.cleanup(), "value ops regression test failed");
}
