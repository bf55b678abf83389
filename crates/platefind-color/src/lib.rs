//! platefind-color - Color processing for the platefind toolkit
//!
//! This crate provides:
//!
//! - **Color space conversion** - RGB to grayscale and RGB to HSV
//! - **Channel split** - pulling single planes out of a three-channel raster
//! - **Range masking** - binary masks from per-channel bounds, with union
//! - **Binarization** - fixed-threshold and Otsu's method
//!
//! # Examples
//!
//! ## Extracting a red mask from an HSV image
//!
//! ```
//! use platefind_color::{ChannelBounds, in_range, or_mask, to_hsv};
//! use platefind_core::{PixelFormat, Raster};
//!
//! let rgb = Raster::new(32, 32, PixelFormat::Rgb8).unwrap();
//! let hsv = to_hsv(&rgb).unwrap();
//!
//! // Red wraps around the hue circle, so two bands are needed
//! let low = in_range(&hsv, ChannelBounds::new([0, 80, 80], [10, 255, 255]).unwrap()).unwrap();
//! let high = in_range(&hsv, ChannelBounds::new([170, 80, 80], [179, 255, 255]).unwrap()).unwrap();
//! let mask = or_mask(&low, &high).unwrap();
//! assert_eq!(mask.count_nonzero(), 0);
//! ```

pub mod colorspace;
pub mod error;
pub mod inrange;
pub mod threshold;

pub use colorspace::{Hsv, luma, rgb_to_hsv, split_channels, to_gray, to_hsv};
pub use error::{ColorError, ColorResult};
pub use inrange::{ChannelBounds, in_range, or_mask};
pub use threshold::{otsu_threshold, threshold_binary, threshold_otsu};
