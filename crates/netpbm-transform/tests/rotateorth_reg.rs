//! Orthogonal rotation regression test
//!
//! Checks rotate_orth against the single-step rotations, the 90 degree
//! index law on non-square images of every kind, and that four quarter
//! turns give back the input.

use netpbm_core::Pix;
use netpbm_test::{RegParams, patterns};
use netpbm_transform::{rotate_90, rotate_180, rotate_orth};

#[test]
fn rotateorth_reg() {
    let mut rp = RegParams::new("rotateorth");

    let pix1 = patterns::checkerboard(13, 7, 3);
    test_orth_rotation(&mut rp, &pix1, "bitmap");

    let pix8 = patterns::gradient(9, 5, 255);
    test_orth_rotation(&mut rp, &pix8, "graymap");

    let pix16 = patterns::color_ramp(6, 11, 4095);
    test_orth_rotation(&mut rp, &pix16, "pixmap");

    assert!(rp.cleanup(), "rotateorth regression test failed");
}

fn rotated(pixs: &Pix, quads: u32) -> Pix {
    let mut pix = pixs.clone();
    rotate_orth(&mut pix, quads);
    pix
}

fn test_orth_rotation(rp: &mut RegParams, pixs: &Pix, label: &str) {
    let (w, h) = pixs.size();
    eprintln!("Testing {} orthogonal rotation: {}x{}", label, w, h);

    // --- rotate_orth(0) = identity ---
    let r0 = rotated(pixs, 0);
    rp.compare_pix(pixs, &r0);

    // --- rotate_orth(1) = 90 cw ---
    let r1 = rotated(pixs, 1);
    rp.compare_values(h as f64, r1.width() as f64, 0.0);
    rp.compare_values(w as f64, r1.height() as f64, 0.0);

    let mut r90 = pixs.clone();
    rotate_90(&mut r90, true);
    rp.compare_pix(&r1, &r90);

    // output (x, y) takes input (y, h - 1 - x)
    let law = (0..r1.height()).all(|y| {
        (0..r1.width()).all(|x| r1.get_pixel(x, y) == pixs.get_pixel(y, h - 1 - x))
    });
    rp.compare_values(1.0, if law { 1.0 } else { 0.0 }, 0.0);
    eprintln!("  {}: cw index law holds: {}", label, law);

    rp.write_pix(&r1, r1.magic_number()).expect("write r1");

    // --- rotate_orth(2) = 180 ---
    let r2 = rotated(pixs, 2);
    rp.compare_values(w as f64, r2.width() as f64, 0.0);
    rp.compare_values(h as f64, r2.height() as f64, 0.0);

    let mut r180 = pixs.clone();
    rotate_180(&mut r180);
    rp.compare_pix(&r2, &r180);

    // --- rotate_orth(3) = 90 ccw ---
    let r3 = rotated(pixs, 3);
    let mut r90ccw = pixs.clone();
    rotate_90(&mut r90ccw, false);
    rp.compare_pix(&r3, &r90ccw);

    // ccw undoes cw
    let mut back = r1.clone();
    rotate_90(&mut back, false);
    rp.compare_pix(pixs, &back);

    // --- 4 quarter turns = identity ---
    let mut r4 = pixs.clone();
    for _ in 0..4 {
        rotate_90(&mut r4, true);
    }
    rp.compare_pix(pixs, &r4);

    // quads is taken modulo 4
    rp.compare_pix(&r1, &rotated(pixs, 5));
}
