//! platefind-morph - Binary morphology for the platefind toolkit
//!
//! Erosion, dilation, opening and closing over Gray8 binary masks with
//! rectangular structuring elements.
//!
//! # Examples
//!
//! ```
//! use platefind_core::{PixelFormat, Raster};
//! use platefind_morph::{Sel, open};
//!
//! let mask = Raster::new(32, 32, PixelFormat::Gray8).unwrap();
//! let sel = Sel::rect(5, 5).unwrap();
//! let cleaned = open(&mask, &sel).unwrap();
//! assert_eq!(cleaned.count_nonzero(), 0);
//! ```

pub mod binary;
pub mod error;
pub mod sel;

pub use binary::{close, dilate, erode, open};
pub use error::{MorphError, MorphResult};
pub use sel::Sel;
