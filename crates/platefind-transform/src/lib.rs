//! platefind-transform - Geometric transforms for the platefind toolkit
//!
//! Rotation about an arbitrary center (or the image center) with bilinear
//! sampling into a same-sized canvas. Cropping lives in `platefind-core`
//! next to the raster type.

pub mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{rotate_about, rotate_about_center};
