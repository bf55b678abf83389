//! Platefind - Classical image processing with plate detection
//!
//! A small layered toolkit for classical image processing, built around
//! one applied task: finding plate-like rectangular regions (elongated,
//! nearly solid bright bars) in an image.
//!
//! # Overview
//!
//! - Color space conversion, range masking, binarization
//! - Mean and Gaussian smoothing
//! - Binary morphology (erosion, dilation, opening, closing)
//! - Connected components, external contours, minimum-area rotated
//!   rectangles, flood fill
//! - Rotation and cropping
//! - PNG / PNM I/O
//! - The rotated-rect region classifier and detection pipeline
//!
//! # Example
//!
//! ```
//! use platefind::{PixelFormat, Raster};
//! use platefind::detect::{DetectOptions, detect_plates};
//!
//! let image = Raster::new(320, 240, PixelFormat::Rgb8).unwrap();
//! let detection = detect_plates(&image, &DetectOptions::default()).unwrap();
//! assert!(detection.results.is_empty());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use platefind_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use platefind_color as color;
pub use platefind_detect as detect;
pub use platefind_filter as filter;
pub use platefind_io as io;
pub use platefind_morph as morph;
pub use platefind_region as region;
pub use platefind_transform as transform;
