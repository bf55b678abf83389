//! Rotated-rect region classification
//!
//! Finds the external contours of a binary mask, fits each one with its
//! minimum-area rotated rectangle, and decides per contour whether the
//! region looks like a plate: an elongated, nearly solid bar.
//!
//! The decision reads three numbers off each region:
//!
//! - **aspect ratio** - longer rectangle side over shorter, always >= 1
//! - **fill ratio** - contour area over rectangle area; solid bars sit
//!   near 1, sparse or open shapes fall well below
//! - **contour area** - a second, stricter floor than the noise pre-filter
//!
//! The classification itself is a pure function: same mask and parameters,
//! same results, no side effects.

use crate::error::{DetectError, DetectResult};
use platefind_core::Raster;
use platefind_region::{RotatedRect, find_external_contours, min_area_rect};

/// Decision thresholds for [`classify_regions`].
///
/// The defaults are tuned for upright light bars roughly 3.3 times as tall
/// as wide; callers working with other targets override the bands.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierParams {
    /// Lower aspect-ratio bound, exclusive
    pub aspect_min: f64,
    /// Upper aspect-ratio bound, exclusive
    pub aspect_max: f64,
    /// Lower fill-ratio bound, exclusive
    pub fill_min: f64,
    /// Upper fill-ratio bound, inclusive
    pub fill_max: f64,
    /// Contour area floor for targets, exclusive
    pub target_area_min: f64,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            aspect_min: 3.0,
            aspect_max: 3.5,
            fill_min: 0.8,
            fill_max: 1.0,
            target_area_min: 100.0,
        }
    }
}

/// Measurements and verdict for one region.
///
/// One result per contour that survives the `min_area` pre-filter and has
/// non-degenerate rectangle geometry. Non-targets are reported too, so a
/// caller can render every candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Index of the contour in discovery order
    pub contour_index: usize,
    /// Contour area (shoelace formula)
    pub contour_area: f64,
    /// Minimum-area rotated bounding rectangle
    pub rect: RotatedRect,
    /// Rectangle area
    pub rect_area: f64,
    /// `contour_area / rect_area`
    pub fill_ratio: f64,
    /// Longer rectangle side over shorter
    pub aspect_ratio: f64,
    /// Whether all target criteria hold
    pub is_target: bool,
}

/// Classify the foreground regions of a binary mask.
///
/// Contours with area below `min_area` are dropped as noise; area exactly
/// at `min_area` is kept. Contours whose minimum-area rectangle has a zero
/// side are silently excluded rather than reported - they are degenerate
/// imagery (single pixels, one-pixel-wide lines), not caller mistakes.
///
/// Results come back in contour discovery order (raster-scan order of each
/// component's topmost-leftmost pixel).
///
/// # Errors
///
/// Returns [`DetectError::InvalidInput`] if `mask` is not single-channel.
/// (A raster with no pixels is unrepresentable; the core constructor
/// rejects zero dimensions.) No other error is produced.
pub fn classify_regions(
    mask: &Raster,
    min_area: f64,
    params: &ClassifierParams,
) -> DetectResult<Vec<ClassificationResult>> {
    if !mask.is_gray() {
        return Err(DetectError::InvalidInput(format!(
            "mask must be single-channel, got {}",
            mask.format()
        )));
    }

    let contours = find_external_contours(mask)?;
    let mut results = Vec::new();

    for (contour_index, contour) in contours.iter().enumerate() {
        let contour_area = contour.area();
        if contour_area < min_area {
            continue;
        }

        let rect = min_area_rect(contour.points());
        if rect.short_side() <= 0.0 {
            continue;
        }
        let rect_area = rect.area();
        if rect_area == 0.0 {
            continue;
        }

        let fill_ratio = contour_area / rect_area;
        let aspect_ratio = (rect.long_side() / rect.short_side()) as f64;

        let is_target = aspect_ratio > params.aspect_min
            && aspect_ratio < params.aspect_max
            && fill_ratio > params.fill_min
            && fill_ratio <= params.fill_max
            && contour_area > params.target_area_min;

        results.push(ClassificationResult {
            contour_index,
            contour_area,
            rect,
            rect_area,
            fill_ratio,
            aspect_ratio,
            is_target,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platefind_core::{PixelFormat, Raster};

    fn mask_with_block(w: u32, h: u32, x0: u32, y0: u32, bw: u32, bh: u32) -> Raster {
        let mut m = Raster::new(w, h, PixelFormat::Gray8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                m.put_gray(x, y, 255);
            }
        }
        m.into()
    }

    #[test]
    fn test_default_params_match_tuned_bands() {
        let p = ClassifierParams::default();
        assert_eq!((p.aspect_min, p.aspect_max), (3.0, 3.5));
        assert_eq!((p.fill_min, p.fill_max), (0.8, 1.0));
        assert_eq!(p.target_area_min, 100.0);
    }

    #[test]
    fn test_rgb_mask_rejected() {
        let rgb = Raster::new(8, 8, PixelFormat::Rgb8).unwrap();
        assert!(matches!(
            classify_regions(&rgb, 0.0, &ClassifierParams::default()),
            Err(DetectError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nontarget_still_reported() {
        // A square region: wrong aspect, but it must appear in the output
        let m = mask_with_block(40, 40, 5, 5, 20, 20);
        let results = classify_regions(&m, 0.0, &ClassifierParams::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_target);
        assert!((results[0].aspect_ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ratios_of_solid_bar() {
        // 10x31 bar: rectangle sides are 9 and 30
        let m = mask_with_block(50, 50, 5, 5, 10, 31);
        let results = classify_regions(&m, 0.0, &ClassifierParams::default()).unwrap();
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert!((r.aspect_ratio - 30.0 / 9.0).abs() < 1e-4);
        assert!((r.fill_ratio - 1.0).abs() < 1e-6);
        assert_eq!(r.contour_area, 9.0 * 30.0);
        assert!(r.is_target);
    }

    #[test]
    fn test_custom_bands() {
        // Same square as above, accepted once the aspect band includes 1.0
        let m = mask_with_block(40, 40, 5, 5, 20, 20);
        let params = ClassifierParams {
            aspect_min: 0.5,
            aspect_max: 2.0,
            ..ClassifierParams::default()
        };
        let results = classify_regions(&m, 0.0, &params).unwrap();
        assert!(results[0].is_target);
    }
}
