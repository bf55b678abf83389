//! Color space conversion
//!
//! RGB to grayscale and RGB to HSV, both as per-pixel helpers and as
//! whole-raster conversions.
//!
//! # HSV encoding
//!
//! The 8-bit HSV encoding follows the OpenCV convention: hue is halved into
//! [0, 180) so it fits a byte (red ≈ 0 or ≈ 179, green ≈ 60, blue ≈ 120),
//! saturation and value use the full [0, 255] range. Range masks written
//! against that convention (see [`crate::in_range`]) work unchanged here.

use crate::error::{ColorError, ColorResult};
use platefind_core::{PixelFormat, Raster};

/// 8-bit HSV triple (hue in [0, 180), saturation and value in [0, 255])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert one RGB pixel to a grayscale value.
///
/// ITU-R BT.601 luma weights, fixed-point with rounding:
/// `0.299 R + 0.587 G + 0.114 B`.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((77 * r as u32 + 150 * g as u32 + 29 * b as u32 + 128) >> 8) as u8
}

/// Convert one RGB pixel to 8-bit HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let ri = r as i32;
    let gi = g as i32;
    let bi = b as i32;

    let max = ri.max(gi).max(bi);
    let min = ri.min(gi).min(bi);
    let delta = max - min;

    let v = max;
    if delta == 0 {
        return Hsv {
            h: 0,
            s: 0,
            v: v as u8,
        };
    }

    let s = (255.0 * delta as f32 / max as f32 + 0.5) as i32;

    let h_deg = if max == ri {
        60.0 * (gi - bi) as f32 / delta as f32
    } else if max == gi {
        120.0 + 60.0 * (bi - ri) as f32 / delta as f32
    } else {
        240.0 + 60.0 * (ri - gi) as f32 / delta as f32
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };
    // Halve into a byte; 360 wraps back to 0
    let mut h = (h_deg / 2.0 + 0.5) as i32;
    if h >= 180 {
        h = 0;
    }

    Hsv {
        h: h as u8,
        s: s.clamp(0, 255) as u8,
        v: v as u8,
    }
}

/// Convert an RGB raster to grayscale.
///
/// # Errors
///
/// Returns [`ColorError::NotRgb`] for non-RGB input.
pub fn to_gray(raster: &Raster) -> ColorResult<Raster> {
    if !raster.is_rgb() {
        return Err(ColorError::NotRgb(raster.format()));
    }

    let (w, h) = raster.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Gray8)?
        .try_into_mut()
        .expect("fresh raster");

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = raster.rgb_at(x, y);
            out.put_gray(x, y, luma(r, g, b));
        }
    }

    Ok(out.into())
}

/// Convert an RGB raster to an HSV raster.
///
/// The result is an `Rgb8`-format raster whose channels carry H, S and V;
/// use [`crate::split_channels`] to pull out a single plane.
///
/// # Errors
///
/// Returns [`ColorError::NotRgb`] for non-RGB input.
pub fn to_hsv(raster: &Raster) -> ColorResult<Raster> {
    if !raster.is_rgb() {
        return Err(ColorError::NotRgb(raster.format()));
    }

    let (w, h) = raster.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Rgb8)?
        .try_into_mut()
        .expect("fresh raster");

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = raster.rgb_at(x, y);
            let hsv = rgb_to_hsv(r, g, b);
            out.put_rgb(x, y, hsv.h, hsv.s, hsv.v);
        }
    }

    Ok(out.into())
}

/// Split a three-channel raster into its planes.
///
/// # Errors
///
/// Returns [`ColorError::NotRgb`] for single-channel input.
pub fn split_channels(raster: &Raster) -> ColorResult<[Raster; 3]> {
    if !raster.is_rgb() {
        return Err(ColorError::NotRgb(raster.format()));
    }

    let (w, h) = raster.dimensions();
    let mut planes = [
        Raster::new(w, h, PixelFormat::Gray8)?.try_into_mut().expect("fresh raster"),
        Raster::new(w, h, PixelFormat::Gray8)?.try_into_mut().expect("fresh raster"),
        Raster::new(w, h, PixelFormat::Gray8)?.try_into_mut().expect("fresh raster"),
    ];

    for y in 0..h {
        for x in 0..w {
            let (c0, c1, c2) = raster.rgb_at(x, y);
            planes[0].put_gray(x, y, c0);
            planes[1].put_gray(x, y, c1);
            planes[2].put_gray(x, y, c2);
        }
    }

    let [p0, p1, p2] = planes;
    Ok([p0.into(), p1.into(), p2.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
    }

    #[test]
    fn test_luma_green_dominates() {
        assert!(luma(0, 255, 0) > luma(255, 0, 0));
        assert!(luma(255, 0, 0) > luma(0, 0, 255));
    }

    #[test]
    fn test_hsv_pure_colors() {
        // Red sits at hue 0, green at 60, blue at 120 (halved-degree scale)
        assert_eq!(rgb_to_hsv(255, 0, 0), Hsv { h: 0, s: 255, v: 255 });
        assert_eq!(rgb_to_hsv(0, 255, 0), Hsv { h: 60, s: 255, v: 255 });
        assert_eq!(rgb_to_hsv(0, 0, 255), Hsv { h: 120, s: 255, v: 255 });
    }

    #[test]
    fn test_hsv_gray_has_no_saturation() {
        let hsv = rgb_to_hsv(128, 128, 128);
        assert_eq!((hsv.h, hsv.s), (0, 0));
        assert_eq!(hsv.v, 128);
    }

    #[test]
    fn test_hsv_hue_wraps_below_180() {
        // Slightly orange-ish reds stay near 0, magenta-ish reds near 179
        let hsv = rgb_to_hsv(255, 0, 10);
        assert!(hsv.h >= 178 || hsv.h <= 2, "h = {}", hsv.h);
    }

    #[test]
    fn test_to_gray_dimensions() {
        let mut m = Raster::new(3, 2, PixelFormat::Rgb8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        m.put_rgb(0, 0, 255, 255, 255);
        let gray = to_gray(&m.into()).unwrap();
        assert_eq!(gray.dimensions(), (3, 2));
        assert_eq!(gray.gray_at(0, 0), 255);
        assert_eq!(gray.gray_at(1, 1), 0);
    }

    #[test]
    fn test_to_gray_rejects_gray_input() {
        let g = Raster::new(2, 2, PixelFormat::Gray8).unwrap();
        assert!(matches!(to_gray(&g), Err(ColorError::NotRgb(_))));
    }

    #[test]
    fn test_split_channels() {
        let mut m = Raster::new(2, 1, PixelFormat::Rgb8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        m.put_rgb(0, 0, 1, 2, 3);
        m.put_rgb(1, 0, 4, 5, 6);
        let [r, g, b] = split_channels(&m.into()).unwrap();
        assert_eq!(r.gray_at(1, 0), 4);
        assert_eq!(g.gray_at(0, 0), 2);
        assert_eq!(b.gray_at(1, 0), 6);
    }
}
