//! Range masking
//!
//! Builds binary masks by testing each pixel against per-channel bounds,
//! plus the mask union needed when a color wraps around the hue circle
//! (red needs two bands under the halved-degree hue encoding).

use crate::error::{ColorError, ColorResult};
use platefind_core::{PixelFormat, Raster};

/// Per-channel inclusive bounds for [`in_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBounds {
    pub lo: [u8; 3],
    pub hi: [u8; 3],
}

impl ChannelBounds {
    /// Create bounds, validating `lo <= hi` per channel.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRange`] if any lower bound exceeds its
    /// upper bound.
    pub fn new(lo: [u8; 3], hi: [u8; 3]) -> ColorResult<Self> {
        for channel in 0..3 {
            if lo[channel] > hi[channel] {
                return Err(ColorError::InvalidRange {
                    channel,
                    lo: lo[channel],
                    hi: hi[channel],
                });
            }
        }
        Ok(Self { lo, hi })
    }
}

/// Build a binary mask of pixels falling inside the bounds in every channel.
///
/// Output is a `Gray8` raster with 255 where all three channels lie within
/// `[lo, hi]` inclusive, 0 elsewhere.
///
/// # Errors
///
/// Returns [`ColorError::NotRgb`] for single-channel input.
pub fn in_range(raster: &Raster, bounds: ChannelBounds) -> ColorResult<Raster> {
    if !raster.is_rgb() {
        return Err(ColorError::NotRgb(raster.format()));
    }

    let (w, h) = raster.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Gray8)?
        .try_into_mut()
        .expect("fresh raster");

    for y in 0..h {
        for x in 0..w {
            let (c0, c1, c2) = raster.rgb_at(x, y);
            let inside = c0 >= bounds.lo[0]
                && c0 <= bounds.hi[0]
                && c1 >= bounds.lo[1]
                && c1 <= bounds.hi[1]
                && c2 >= bounds.lo[2]
                && c2 <= bounds.hi[2];
            if inside {
                out.put_gray(x, y, 255);
            }
        }
    }

    Ok(out.into())
}

/// Union of two binary masks: foreground where either input is foreground.
///
/// # Errors
///
/// Returns [`ColorError::NotGray`] if either input is not single-channel,
/// or [`ColorError::SizeMismatch`] on differing dimensions.
pub fn or_mask(a: &Raster, b: &Raster) -> ColorResult<Raster> {
    if !a.is_gray() {
        return Err(ColorError::NotGray(a.format()));
    }
    if !b.is_gray() {
        return Err(ColorError::NotGray(b.format()));
    }
    if a.dimensions() != b.dimensions() {
        return Err(ColorError::SizeMismatch(
            a.width(),
            a.height(),
            b.width(),
            b.height(),
        ));
    }

    let (w, h) = a.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Gray8)?
        .try_into_mut()
        .expect("fresh raster");

    for y in 0..h {
        for x in 0..w {
            if a.gray_at(x, y) != 0 || b.gray_at(x, y) != 0 {
                out.put_gray(x, y, 255);
            }
        }
    }

    Ok(out.into())
}
