//! Region classification regression test
//!
//! Exercises the rotated-rect classifier on synthetic masks: solid bars,
//! squares, open frames, degenerate geometry, and the area-threshold
//! boundary.
//!
//! Run with:
//! ```
//! cargo test -p platefind-detect --test classify_reg
//! ```

use platefind_core::{PixelFormat, Raster, RasterMut};
use platefind_detect::{ClassifierParams, classify_regions};

fn blank(w: u32, h: u32) -> RasterMut {
    Raster::new(w, h, PixelFormat::Gray8)
        .unwrap()
        .try_into_mut()
        .unwrap()
}

fn fill_block(m: &mut RasterMut, x0: u32, y0: u32, w: u32, h: u32) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            m.put_gray(x, y, 255);
        }
    }
}

#[test]
fn empty_mask_yields_empty_list() {
    let mask: Raster = blank(64, 64).into();
    let results = classify_regions(&mask, 50.0, &ClassifierParams::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn solid_bar_is_target() {
    // 30x100 solid bar: rectangle sides 29 and 99, aspect ~3.41, fill 1.0
    let mut m = blank(60, 120);
    fill_block(&mut m, 10, 10, 30, 100);
    let mask: Raster = m.into();

    let results = classify_regions(&mask, 50.0, &ClassifierParams::default()).unwrap();
    assert_eq!(results.len(), 1);
    let r = &results[0];
    eprintln!(
        "bar: area={} aspect={:.3} fill={:.3}",
        r.contour_area, r.aspect_ratio, r.fill_ratio
    );
    assert_eq!(r.contour_area, 29.0 * 99.0);
    assert!(r.aspect_ratio > 3.0 && r.aspect_ratio < 3.5);
    assert!((r.fill_ratio - 1.0).abs() < 1e-9);
    assert!(r.is_target);
}

#[test]
fn square_is_never_target() {
    // Aspect ratio 1.0 fails the band no matter how large the square is
    for side in [20u32, 50, 80] {
        let mut m = blank(100, 100);
        fill_block(&mut m, 5, 5, side, side);
        let mask: Raster = m.into();

        let results = classify_regions(&mask, 50.0, &ClassifierParams::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_target, "side {} classified as target", side);
    }
}

#[test]
fn open_frame_fails_fill() {
    // The outline of a 100x30 rectangle, 2 px stroke, with a gap in the
    // right side. The traced boundary then encloses only the stroke, so
    // the fill ratio collapses while the aspect ratio stays in band.
    let mut m = blank(120, 50);
    fill_block(&mut m, 10, 10, 100, 2); // top
    fill_block(&mut m, 10, 38, 100, 2); // bottom
    fill_block(&mut m, 10, 12, 2, 26); // left
    fill_block(&mut m, 108, 12, 2, 8); // right, upper stub
    fill_block(&mut m, 108, 30, 2, 8); // right, lower stub (gap at 20..30)
    let mask: Raster = m.into();

    let results = classify_regions(&mask, 50.0, &ClassifierParams::default()).unwrap();
    assert_eq!(results.len(), 1);
    let r = &results[0];
    eprintln!(
        "frame: area={:.0} aspect={:.3} fill={:.3}",
        r.contour_area, r.aspect_ratio, r.fill_ratio
    );
    assert!(r.aspect_ratio > 3.0 && r.aspect_ratio < 3.5);
    assert!(r.fill_ratio < 0.8);
    assert!(!r.is_target);
}

#[test]
fn classification_is_idempotent() {
    let mut m = blank(90, 90);
    fill_block(&mut m, 8, 12, 24, 63);
    fill_block(&mut m, 50, 40, 17, 17);
    let mask: Raster = m.into();

    let params = ClassifierParams::default();
    let a = classify_regions(&mask, 10.0, &params).unwrap();
    let b = classify_regions(&mask, 10.0, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn degenerate_rectangles_are_excluded() {
    // A single pixel and a one-pixel-wide line both produce rectangles
    // with a zero side; neither may appear or raise a division error
    let mut m = blank(40, 40);
    m.put_gray(3, 3, 255);
    for x in 10..30 {
        m.put_gray(x, 20, 255);
    }
    let mask: Raster = m.into();

    let results = classify_regions(&mask, 0.0, &ClassifierParams::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn min_area_boundary_is_inclusive() {
    // A 4x4 block has contour area 9.0
    let mut m = blank(20, 20);
    fill_block(&mut m, 5, 5, 4, 4);
    let mask: Raster = m.into();

    let params = ClassifierParams::default();
    let at = classify_regions(&mask, 9.0, &params).unwrap();
    assert_eq!(at.len(), 1, "area exactly at min_area must be kept");

    let above = classify_regions(&mask, 10.0, &params).unwrap();
    assert!(above.is_empty(), "area below min_area must be dropped");
}

#[test]
fn results_follow_discovery_order() {
    // Two bars; the one whose top-left pixel comes first in raster order
    // must come first in the result list
    let mut m = blank(100, 140);
    fill_block(&mut m, 60, 5, 10, 31);
    fill_block(&mut m, 5, 30, 10, 31);
    let mask: Raster = m.into();

    let results = classify_regions(&mask, 0.0, &ClassifierParams::default()).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].contour_index, 0);
    assert!(results[0].rect.center.x > results[1].rect.center.x);
}
