//! Binary morphological operations
//!
//! Erosion, dilation, opening, and closing for Gray8 binary masks
//! (foreground = nonzero, written as 255).
//!
//! Pixels outside the raster are background: erosion eats into components
//! touching the border, dilation never writes beyond it.

use crate::error::{MorphError, MorphResult};
use crate::sel::Sel;
use platefind_core::{PixelFormat, Raster};

fn check_binary(raster: &Raster) -> MorphResult<()> {
    if !raster.is_gray() {
        return Err(MorphError::NotBinary(raster.format()));
    }
    Ok(())
}

/// Dilate a binary mask.
///
/// A pixel is foreground in the output if any structuring-element position
/// over it covers a foreground input pixel.
pub fn dilate(raster: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_binary(raster)?;

    let (w, h) = raster.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Gray8)?
        .try_into_mut()
        .expect("fresh raster");

    let offsets: Vec<_> = sel.offsets().collect();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let hit = offsets.iter().any(|&(dx, dy)| {
                let sx = x - dx;
                let sy = y - dy;
                sx >= 0
                    && sx < w as i32
                    && sy >= 0
                    && sy < h as i32
                    && raster.gray_at(sx as u32, sy as u32) != 0
            });
            if hit {
                out.put_gray(x as u32, y as u32, 255);
            }
        }
    }

    Ok(out.into())
}

/// Erode a binary mask.
///
/// A pixel survives only if every structuring-element position over it
/// covers a foreground input pixel.
pub fn erode(raster: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_binary(raster)?;

    let (w, h) = raster.dimensions();
    let mut out = Raster::new(w, h, PixelFormat::Gray8)?
        .try_into_mut()
        .expect("fresh raster");

    let offsets: Vec<_> = sel.offsets().collect();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let all = offsets.iter().all(|&(dx, dy)| {
                let sx = x + dx;
                let sy = y + dy;
                sx >= 0
                    && sx < w as i32
                    && sy >= 0
                    && sy < h as i32
                    && raster.gray_at(sx as u32, sy as u32) != 0
            });
            if all {
                out.put_gray(x as u32, y as u32, 255);
            }
        }
    }

    Ok(out.into())
}

/// Open a binary mask (erosion followed by dilation).
///
/// Removes small foreground specks and smooths contours.
pub fn open(raster: &Raster, sel: &Sel) -> MorphResult<Raster> {
    let eroded = erode(raster, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary mask (dilation followed by erosion).
///
/// Fills small holes and connects nearby objects.
pub fn close(raster: &Raster, sel: &Sel) -> MorphResult<Raster> {
    let dilated = dilate(raster, sel)?;
    erode(&dilated, sel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platefind_core::RasterMut;

    fn mask(w: u32, h: u32) -> RasterMut {
        Raster::new(w, h, PixelFormat::Gray8)
            .unwrap()
            .try_into_mut()
            .unwrap()
    }

    fn solid_block(w: u32, h: u32, x0: u32, y0: u32, bw: u32, bh: u32) -> Raster {
        let mut m = mask(w, h);
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                m.put_gray(x, y, 255);
            }
        }
        m.into()
    }

    #[test]
    fn test_dilate_grows() {
        let src = solid_block(11, 11, 5, 5, 1, 1);
        let sel = Sel::rect(3, 3).unwrap();
        let out = dilate(&src, &sel).unwrap();
        assert_eq!(out.count_nonzero(), 9);
        assert_eq!(out.gray_at(4, 4), 255);
        assert_eq!(out.gray_at(3, 3), 0);
    }

    #[test]
    fn test_erode_shrinks() {
        let src = solid_block(11, 11, 3, 3, 5, 5);
        let sel = Sel::rect(3, 3).unwrap();
        let out = erode(&src, &sel).unwrap();
        assert_eq!(out.count_nonzero(), 9);
        assert_eq!(out.gray_at(4, 4), 255);
        assert_eq!(out.gray_at(3, 3), 0);
    }

    #[test]
    fn test_erode_removes_speck() {
        let src = solid_block(9, 9, 4, 4, 1, 1);
        let sel = Sel::rect(3, 3).unwrap();
        let out = erode(&src, &sel).unwrap();
        assert_eq!(out.count_nonzero(), 0);
    }

    #[test]
    fn test_open_keeps_large_removes_small() {
        // A 5x5 block plus an isolated pixel; opening keeps only the block
        let mut m = mask(16, 16);
        for y in 2..7 {
            for x in 2..7 {
                m.put_gray(x, y, 255);
            }
        }
        m.put_gray(12, 12, 255);
        let src: Raster = m.into();

        let sel = Sel::rect(3, 3).unwrap();
        let out = open(&src, &sel).unwrap();
        assert_eq!(out.count_nonzero(), 25);
        assert_eq!(out.gray_at(12, 12), 0);
    }

    #[test]
    fn test_close_fills_hole() {
        // A 5x5 block with its center knocked out
        let mut m = mask(11, 11);
        for y in 3..8 {
            for x in 3..8 {
                m.put_gray(x, y, 255);
            }
        }
        m.put_gray(5, 5, 0);
        let src: Raster = m.into();

        let sel = Sel::rect(3, 3).unwrap();
        let out = close(&src, &sel).unwrap();
        assert_eq!(out.gray_at(5, 5), 255);
    }

    #[test]
    fn test_rejects_rgb() {
        let rgb = Raster::new(4, 4, PixelFormat::Rgb8).unwrap();
        let sel = Sel::rect(3, 3).unwrap();
        assert!(matches!(dilate(&rgb, &sel), Err(MorphError::NotBinary(_))));
    }
}
