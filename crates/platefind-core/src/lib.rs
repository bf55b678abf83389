//! platefind-core - Basic data structures for image processing
//!
//! This crate provides the fundamental types used throughout the platefind
//! toolkit:
//!
//! - [`Raster`] / [`RasterMut`] - The image container (immutable / mutable)
//! - [`PixelFormat`] - Gray8 and Rgb8 pixel storage
//! - [`Point`] / [`PointF`] / [`Rect`] - Geometry primitives
//! - [`draw`] - Shape rendering (lines, rectangles, circles, polygons)
//! - [`crop`] - Rectangular clipping

pub mod draw;
pub mod error;
pub mod geom;
pub mod raster;

pub use draw::Color;
pub use error::{Error, Result};
pub use geom::{Point, PointF, Rect};
pub use raster::{PixelFormat, Raster, RasterMut, crop};
