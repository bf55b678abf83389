//! platefind-region - Region processing for the platefind toolkit
//!
//! This crate provides:
//!
//! - **Connected component analysis** - labeling and per-component stats
//! - **External contour tracing** - Moore neighbor tracing, outer borders only
//! - **Contour geometry** - shoelace area, perimeter, bounding boxes
//! - **Minimum-area rotated rectangles** - convex hull + caliper sweep
//! - **Seed fill** - flood fill from a seed point
//!
//! # Examples
//!
//! ## Contours of a binary mask
//!
//! ```
//! use platefind_core::{PixelFormat, Raster};
//! use platefind_region::find_external_contours;
//!
//! let mask = Raster::new(64, 64, PixelFormat::Gray8).unwrap();
//! let mut m = mask.try_into_mut().unwrap();
//! for y in 10..20 {
//!     for x in 10..40 {
//!         m.put_gray(x, y, 255);
//!     }
//! }
//! let contours = find_external_contours(&m.into()).unwrap();
//! assert_eq!(contours.len(), 1);
//! assert_eq!(contours[0].area(), 29.0 * 9.0);
//! ```
//!
//! ## Minimum-area rectangle of a contour
//!
//! ```
//! use platefind_core::Point;
//! use platefind_region::min_area_rect;
//!
//! let pts = [Point::new(0, 0), Point::new(10, 0), Point::new(10, 4), Point::new(0, 4)];
//! let rect = min_area_rect(&pts);
//! assert!((rect.area() - 40.0).abs() < 1e-6);
//! ```

pub mod conncomp;
pub mod contour;
pub mod error;
pub mod rotated_rect;
pub mod seedfill;

pub use conncomp::{ConnectedComponent, Connectivity, LabelMap, find_components, label_components};
pub use contour::{Contour, find_external_contours};
pub use error::{RegionError, RegionResult};
pub use rotated_rect::{RotatedRect, convex_hull, min_area_rect};
pub use seedfill::floodfill;
