//! The plate detection pipeline
//!
//! Runs the fixed stage sequence over a color image: grayscale, mean
//! blur, fixed-threshold binarization, morphological opening, then
//! rotated-rect classification and overlay rendering. Every stage's
//! raster is kept in the result so callers can persist intermediates.

use crate::classify::{ClassificationResult, ClassifierParams, classify_regions};
use crate::error::{DetectError, DetectResult};
use crate::overlay::{OverlayStyle, render_overlay};
use platefind_color::{threshold_binary, to_gray};
use platefind_core::Raster;
use platefind_filter::mean_blur;
use platefind_morph::{Sel, open};

/// Stage parameters for [`detect_plates`].
///
/// The defaults carry the values the pipeline was tuned with: a 5x5 mean
/// blur, grayscale threshold 225, a 5x5 structuring element, and a noise
/// floor of 50 square pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectOptions {
    /// Mean blur window (width, height)
    pub blur: (u32, u32),
    /// Grayscale binarization threshold
    pub threshold: u8,
    /// Structuring element size for the opening
    pub sel: (u32, u32),
    /// Contour area pre-filter passed to the classifier
    pub min_area: f64,
    /// Classifier decision thresholds
    pub classifier: ClassifierParams,
    /// Overlay rendering style
    pub style: OverlayStyle,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            blur: (5, 5),
            threshold: 225,
            sel: (5, 5),
            min_area: 50.0,
            classifier: ClassifierParams::default(),
            style: OverlayStyle::default(),
        }
    }
}

/// Intermediate rasters of one [`detect_plates`] run.
#[derive(Debug, Clone)]
pub struct DetectStages {
    /// Grayscale conversion of the input
    pub gray: Raster,
    /// Mean-blurred grayscale
    pub blurred: Raster,
    /// Binary mask after thresholding
    pub binary: Raster,
    /// Mask after morphological opening
    pub opened: Raster,
}

/// Full output of one [`detect_plates`] run.
#[derive(Debug, Clone)]
pub struct PlateDetection {
    /// Per-stage intermediate rasters
    pub stages: DetectStages,
    /// Classification results in contour discovery order
    pub results: Vec<ClassificationResult>,
    /// Input image with rectangles and center marks drawn on
    pub overlay: Raster,
}

impl PlateDetection {
    /// Results classified as targets.
    pub fn targets(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.results.iter().filter(|r| r.is_target)
    }
}

/// Run the detection pipeline over a color image.
///
/// # Errors
///
/// Returns [`DetectError::InvalidInput`] for non-RGB input; stage errors
/// propagate with their own kinds.
pub fn detect_plates(image: &Raster, opts: &DetectOptions) -> DetectResult<PlateDetection> {
    if !image.is_rgb() {
        return Err(DetectError::InvalidInput(format!(
            "detection expects an RGB image, got {}",
            image.format()
        )));
    }

    let gray = to_gray(image)?;
    let blurred = mean_blur(&gray, opts.blur.0, opts.blur.1)?;
    let binary = threshold_binary(&blurred, opts.threshold)?;
    let sel = Sel::rect(opts.sel.0, opts.sel.1)?;
    let opened = open(&binary, &sel)?;

    let results = classify_regions(&opened, opts.min_area, &opts.classifier)?;

    for r in &results {
        tracing::debug!(
            region = r.contour_index,
            contour_area = r.contour_area,
            rect_area = r.rect_area,
            fill_ratio = r.fill_ratio,
            aspect_ratio = r.aspect_ratio,
            is_target = r.is_target,
            "classified region"
        );
    }
    let n_targets = results.iter().filter(|r| r.is_target).count();
    tracing::info!(regions = results.len(), targets = n_targets, "detection finished");

    let overlay = render_overlay(image, &results, &opts.style)?;

    Ok(PlateDetection {
        stages: DetectStages {
            gray,
            blurred,
            binary,
            opened,
        },
        results,
        overlay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use platefind_core::{PixelFormat, Raster};

    /// A black image with one bright bar.
    ///
    /// The 5x5 blur plus threshold trims two pixels per side, so a 34x104
    /// bar reaches the classifier as 30x100: aspect ratio 99/29, in band.
    fn bar_image() -> Raster {
        let mut m = Raster::new(80, 140, PixelFormat::Rgb8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in 15..119 {
            for x in 23..57 {
                m.put_rgb(x, y, 255, 255, 255);
            }
        }
        m.into()
    }

    #[test]
    fn test_detect_finds_bright_bar() {
        let detection = detect_plates(&bar_image(), &DetectOptions::default()).unwrap();
        assert_eq!(detection.targets().count(), 1);
        let t = detection.targets().next().unwrap();
        assert!(t.aspect_ratio > 3.0 && t.aspect_ratio < 3.5);
        assert!(t.fill_ratio > 0.8);
    }

    #[test]
    fn test_detect_dark_image_is_empty() {
        let dark = Raster::new(64, 64, PixelFormat::Rgb8).unwrap();
        let detection = detect_plates(&dark, &DetectOptions::default()).unwrap();
        assert!(detection.results.is_empty());
        assert_eq!(detection.overlay.data(), dark.data());
    }

    #[test]
    fn test_detect_rejects_gray_input() {
        let gray = Raster::new(16, 16, PixelFormat::Gray8).unwrap();
        assert!(matches!(
            detect_plates(&gray, &DetectOptions::default()),
            Err(DetectError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_stages_have_input_dimensions() {
        let img = bar_image();
        let detection = detect_plates(&img, &DetectOptions::default()).unwrap();
        assert_eq!(detection.stages.gray.dimensions(), img.dimensions());
        assert_eq!(detection.stages.opened.dimensions(), img.dimensions());
        assert!(detection.stages.binary.count_nonzero() > 0);
    }
}
