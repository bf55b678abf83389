//! Rectangular clipping of rasters

use super::Raster;
use crate::error::{Error, Result};
use crate::geom::Rect;

/// Copy a rectangular region into a new raster.
///
/// The rectangle is first clipped to the raster bounds; the part that
/// remains is copied. Both pixel formats are supported.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the rectangle does not intersect
/// the raster at all.
pub fn crop(raster: &Raster, rect: Rect) -> Result<Raster> {
    let clipped = rect
        .clip(raster.width() as i32, raster.height() as i32)
        .ok_or_else(|| {
            Error::InvalidParameter(format!(
                "crop rectangle {:?} lies outside {}x{} raster",
                rect,
                raster.width(),
                raster.height()
            ))
        })?;

    let bpp = raster.format().bytes_per_pixel();
    let out = Raster::new(clipped.w as u32, clipped.h as u32, raster.format())?;
    let mut out = out.try_into_mut().expect("freshly created raster is unshared");

    let x0 = clipped.x as usize * bpp;
    let row_bytes = clipped.w as usize * bpp;
    for dy in 0..clipped.h as u32 {
        let src = raster.row(clipped.y as u32 + dy);
        out.row_mut(dy).copy_from_slice(&src[x0..x0 + row_bytes]);
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelFormat;

    #[test]
    fn test_crop_quarter() {
        let r = Raster::new(8, 6, PixelFormat::Gray8).unwrap();
        let mut m = r.try_into_mut().unwrap();
        m.put_gray(1, 1, 77);
        let r: Raster = m.into();

        let quarter = crop(&r, Rect::new_unchecked(0, 0, 4, 3)).unwrap();
        assert_eq!(quarter.dimensions(), (4, 3));
        assert_eq!(quarter.gray_at(1, 1), 77);
    }

    #[test]
    fn test_crop_clips_to_bounds() {
        let r = Raster::new(4, 4, PixelFormat::Rgb8).unwrap();
        let cropped = crop(&r, Rect::new_unchecked(2, 2, 10, 10)).unwrap();
        assert_eq!(cropped.dimensions(), (2, 2));
    }

    #[test]
    fn test_crop_outside_errors() {
        let r = Raster::new(4, 4, PixelFormat::Gray8).unwrap();
        assert!(crop(&r, Rect::new_unchecked(10, 10, 2, 2)).is_err());
    }
}
