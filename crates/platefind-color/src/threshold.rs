//! Binarization
//!
//! Fixed-threshold binarization and Otsu's automatic threshold selection.

use crate::error::{ColorError, ColorResult};
use platefind_core::{PixelFormat, Raster};

/// Convert a grayscale raster to a binary mask using a fixed threshold.
///
/// Pixels strictly greater than `threshold` become 255, the rest 0.
///
/// # Errors
///
/// Returns [`ColorError::NotGray`] for non-grayscale input.
pub fn threshold_binary(raster: &Raster, threshold: u8) -> ColorResult<Raster> {
    if !raster.is_gray() {
        return Err(ColorError::NotGray(raster.format()));
    }

    let (w, h) = raster.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Gray8)?
        .try_into_mut()
        .expect("fresh raster");

    for y in 0..h {
        for x in 0..w {
            if raster.gray_at(x, y) > threshold {
                out.put_gray(x, y, 255);
            }
        }
    }

    Ok(out.into())
}

/// Compute Otsu's threshold for a grayscale raster.
///
/// Maximizes the between-class variance over the 256-bin histogram and
/// returns the selected threshold (pixels above it are foreground).
///
/// # Errors
///
/// Returns [`ColorError::NotGray`] for non-grayscale input.
pub fn otsu_threshold(raster: &Raster) -> ColorResult<u8> {
    if !raster.is_gray() {
        return Err(ColorError::NotGray(raster.format()));
    }

    let mut hist = [0u64; 256];
    for &v in raster.data() {
        hist[v as usize] += 1;
    }
    let total: u64 = raster.width() as u64 * raster.height() as u64;

    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(v, &n)| v as f64 * n as f64)
        .sum();

    let mut weight_bg = 0u64;
    let mut sum_bg = 0.0f64;
    let mut best_t = 0u8;
    let mut best_var = -1.0f64;

    for t in 0..256usize {
        weight_bg += hist[t];
        if weight_bg == 0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0 {
            break;
        }

        sum_bg += t as f64 * hist[t] as f64;
        let mean_bg = sum_bg / weight_bg as f64;
        let mean_fg = (sum_all - sum_bg) / weight_fg as f64;
        let diff = mean_bg - mean_fg;
        let var_between = weight_bg as f64 * weight_fg as f64 * diff * diff;

        if var_between > best_var {
            best_var = var_between;
            best_t = t as u8;
        }
    }

    Ok(best_t)
}

/// Binarize a grayscale raster with Otsu's automatically selected threshold.
///
/// # Errors
///
/// Returns [`ColorError::NotGray`] for non-grayscale input.
pub fn threshold_otsu(raster: &Raster) -> ColorResult<Raster> {
    let t = otsu_threshold(raster)?;
    threshold_binary(raster, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_from(pixels: &[u8], w: u32, h: u32) -> Raster {
        Raster::from_vec(w, h, PixelFormat::Gray8, pixels.to_vec()).unwrap()
    }

    #[test]
    fn test_threshold_strictly_above() {
        let r = gray_from(&[224, 225, 226, 255], 4, 1);
        let bin = threshold_binary(&r, 225).unwrap();
        assert_eq!(bin.gray_at(0, 0), 0);
        assert_eq!(bin.gray_at(1, 0), 0);
        assert_eq!(bin.gray_at(2, 0), 255);
        assert_eq!(bin.gray_at(3, 0), 255);
    }

    #[test]
    fn test_threshold_rejects_rgb() {
        let r = Raster::new(2, 2, PixelFormat::Rgb8).unwrap();
        assert!(matches!(
            threshold_binary(&r, 128),
            Err(ColorError::NotGray(_))
        ));
    }

    #[test]
    fn test_otsu_separates_bimodal() {
        // Half dark around 40, half bright around 210
        let mut pixels = vec![40u8; 32];
        pixels.extend(vec![210u8; 32]);
        let r = gray_from(&pixels, 8, 8);
        let t = otsu_threshold(&r).unwrap();
        assert!(t >= 40 && t < 210, "t = {}", t);

        let bin = threshold_otsu(&r).unwrap();
        assert_eq!(bin.count_nonzero(), 32);
    }

    #[test]
    fn test_otsu_uniform_image() {
        // Single-valued histogram must not panic and yields an empty or full
        // mask, never a mixed one
        let r = gray_from(&vec![100u8; 16], 4, 4);
        let bin = threshold_otsu(&r).unwrap();
        let n = bin.count_nonzero();
        assert!(n == 0 || n == 16);
    }
}
