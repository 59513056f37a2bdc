//! Flip regression test
//!
//! Flips are involutions, and a left-right flip followed by a top-bottom
//! flip is the 180 degree rotation.

use netpbm_core::Pix;
use netpbm_test::{RegParams, patterns};
use netpbm_transform::{flip_lr, flip_tb, rotate_180};

#[test]
fn flip_reg() {
    let mut rp = RegParams::new("flip");

    for (pix, label) in [
        (patterns::checkerboard(10, 5, 2), "bitmap"),
        (patterns::gradient(7, 4, 65535), "graymap"),
        (patterns::color_ramp(5, 8, 255), "pixmap"),
    ] {
        eprintln!("Testing {} flips: {}x{}", label, pix.width(), pix.height());
        test_flips(&mut rp, &pix);
    }

    assert!(rp.cleanup(), "flip regression test failed");
}

fn test_flips(rp: &mut RegParams, pixs: &Pix) {
    let (w, h) = pixs.size();

    let mut lr = pixs.clone();
    flip_lr(&mut lr);
    let mirrored = (0..h).all(|y| (0..w).all(|x| lr.get_pixel(x, y) == pixs.get_pixel(w - 1 - x, y)));
    rp.compare_values(1.0, if mirrored { 1.0 } else { 0.0 }, 0.0);
    rp.write_pix(&lr, lr.magic_number()).expect("write lr");

    let mut tb = pixs.clone();
    flip_tb(&mut tb);
    let mirrored = (0..h).all(|y| (0..w).all(|x| tb.get_pixel(x, y) == pixs.get_pixel(x, h - 1 - y)));
    rp.compare_values(1.0, if mirrored { 1.0 } else { 0.0 }, 0.0);

    // involutions
    flip_lr(&mut lr);
    rp.compare_pix(pixs, &lr);
    flip_tb(&mut tb);
    rp.compare_pix(pixs, &tb);

    // lr then tb is the half turn
    let mut both = pixs.clone();
    flip_lr(&mut both);
    flip_tb(&mut both);
    let mut half = pixs.clone();
    rotate_180(&mut half);
    rp.compare_pix(&both, &half);
}
