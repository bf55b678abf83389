//! platefind-detect - Plate region detection for the platefind toolkit
//!
//! The classification core and the pipeline around it:
//!
//! - [`classify_regions`] - rotated-rect heuristic over a binary mask
//! - [`detect_plates`] - grayscale / blur / threshold / open / classify
//! - [`render_overlay`] - draw results back onto an image
//!
//! # Examples
//!
//! ```
//! use platefind_core::{PixelFormat, Raster};
//! use platefind_detect::{ClassifierParams, classify_regions};
//!
//! let mask = Raster::new(64, 64, PixelFormat::Gray8).unwrap();
//! let results = classify_regions(&mask, 50.0, &ClassifierParams::default()).unwrap();
//! assert!(results.is_empty());
//! ```

pub mod classify;
pub mod error;
pub mod overlay;
pub mod pipeline;

pub use classify::{ClassificationResult, ClassifierParams, classify_regions};
pub use error::{DetectError, DetectResult};
pub use overlay::{OverlayStyle, render_overlay};
pub use pipeline::{DetectOptions, DetectStages, PlateDetection, detect_plates};
