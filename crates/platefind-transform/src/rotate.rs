//! Rotation about an arbitrary center
//!
//! Rotates into a same-sized canvas by inverse mapping with bilinear
//! sampling. Destination pixels that map outside the source stay black.

use crate::error::{TransformError, TransformResult};
use platefind_core::{PointF, Raster};

/// Sample a channel at a sub-pixel position, bilinearly.
///
/// Returns `None` when the position lies outside the source raster.
fn sample_bilinear(raster: &Raster, x: f32, y: f32, channel: usize) -> Option<f32> {
    let (w, h) = raster.dimensions();
    if x < 0.0 || y < 0.0 || x > (w - 1) as f32 || y > (h - 1) as f32 {
        return None;
    }

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = raster.get_unchecked(x0, y0, channel) as f32;
    let p10 = raster.get_unchecked(x1, y0, channel) as f32;
    let p01 = raster.get_unchecked(x0, y1, channel) as f32;
    let p11 = raster.get_unchecked(x1, y1, channel) as f32;

    let top = p00 + fx * (p10 - p00);
    let bottom = p01 + fx * (p11 - p01);
    Some(top + fy * (bottom - top))
}

/// Rotate a raster about a center point.
///
/// Positive `angle_deg` rotates counter-clockwise in the usual image
/// sense; `scale` magnifies about the same center. The output has the
/// source dimensions; uncovered regions are black.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] for a non-positive scale.
pub fn rotate_about(
    raster: &Raster,
    center: PointF,
    angle_deg: f32,
    scale: f32,
) -> TransformResult<Raster> {
    if scale <= 0.0 {
        return Err(TransformError::InvalidParameter(format!(
            "scale must be positive, got {}",
            scale
        )));
    }

    let (w, h) = raster.dimensions();
    let channels = raster.format().channels();
    let mut out = Raster::new(w, h, raster.format())?
        .try_into_mut()
        .expect("fresh raster");

    // Inverse map: rotate destination offsets back by -angle and unscale
    let rad = angle_deg.to_radians();
    let (sin, cos) = rad.sin_cos();

    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - center.x;
            let dy = y as f32 - center.y;
            let sx = center.x + (cos * dx - sin * dy) / scale;
            let sy = center.y + (sin * dx + cos * dy) / scale;
            for c in 0..channels {
                if let Some(v) = sample_bilinear(raster, sx, sy, c) {
                    out.set_unchecked(x, y, c, (v + 0.5).clamp(0.0, 255.0) as u8);
                }
            }
        }
    }

    Ok(out.into())
}

/// Rotate a raster about its center.
pub fn rotate_about_center(raster: &Raster, angle_deg: f32, scale: f32) -> TransformResult<Raster> {
    let center = PointF::new(
        raster.width() as f32 / 2.0,
        raster.height() as f32 / 2.0,
    );
    rotate_about(raster, center, angle_deg, scale)
}
