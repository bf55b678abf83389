//! Kernel convolution and smoothing
//!
//! General 2D convolution over Gray8 and Rgb8 rasters, with the two
//! smoothing filters built on top of it. The border is handled by
//! replicating the edge pixel.

use crate::error::FilterResult;
use crate::kernel::Kernel;
use platefind_core::Raster;

/// Convolve a raster with a kernel.
///
/// Works channel-by-channel for RGB input. Results are rounded and clamped
/// to the byte range.
pub fn convolve(raster: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    let (w, h) = raster.dimensions();
    let channels = raster.format().channels();
    let mut out = Raster::new(w, h, raster.format())?
        .try_into_mut()
        .expect("fresh raster");

    let kw = kernel.width() as i32;
    let kh = kernel.height() as i32;
    let ax = kw / 2;
    let ay = kh / 2;

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            for c in 0..channels {
                let mut acc = 0.0f32;
                for ky in 0..kh {
                    // Replicate edge rows/columns outside the raster
                    let sy = (y + ky - ay).clamp(0, h as i32 - 1) as u32;
                    for kx in 0..kw {
                        let sx = (x + kx - ax).clamp(0, w as i32 - 1) as u32;
                        acc += kernel.weight(kx as u32, ky as u32)
                            * raster.get_unchecked(sx, sy, c) as f32;
                    }
                }
                let v = (acc + 0.5).clamp(0.0, 255.0) as u8;
                out.set_unchecked(x as u32, y as u32, c, v);
            }
        }
    }

    Ok(out.into())
}

/// Mean (box) blur with a `width x height` averaging window.
pub fn mean_blur(raster: &Raster, width: u32, height: u32) -> FilterResult<Raster> {
    convolve(raster, &Kernel::boxcar(width, height)?)
}

/// Gaussian blur with a `width x height` window.
///
/// `sigma <= 0` derives the standard deviation from the kernel size.
pub fn gaussian_blur(raster: &Raster, width: u32, height: u32, sigma: f32) -> FilterResult<Raster> {
    convolve(raster, &Kernel::gaussian(width, height, sigma)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platefind_core::{PixelFormat, Raster};

    fn impulse(w: u32, h: u32) -> Raster {
        let mut m = Raster::new(w, h, PixelFormat::Gray8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        m.put_gray(w / 2, h / 2, 255);
        m.into()
    }

    #[test]
    fn test_mean_blur_spreads_impulse() {
        let blurred = mean_blur(&impulse(9, 9), 3, 3).unwrap();
        // 255 / 9 = 28.33 -> rounds to 28
        assert_eq!(blurred.gray_at(4, 4), 28);
        assert_eq!(blurred.gray_at(3, 3), 28);
        assert_eq!(blurred.gray_at(1, 1), 0);
    }

    #[test]
    fn test_mean_blur_preserves_flat_image() {
        let flat = Raster::from_vec(6, 6, PixelFormat::Gray8, vec![200u8; 36]).unwrap();
        let blurred = mean_blur(&flat, 5, 5).unwrap();
        // Replicated border keeps a constant image constant
        assert!(blurred.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn test_gaussian_blur_centers_mass() {
        let blurred = gaussian_blur(&impulse(9, 9), 5, 5, 1.0).unwrap();
        assert!(blurred.gray_at(4, 4) > blurred.gray_at(3, 4));
        assert!(blurred.gray_at(3, 4) > blurred.gray_at(2, 4));
    }

    #[test]
    fn test_convolve_rgb_channels_independent() {
        let mut m = Raster::new(5, 5, PixelFormat::Rgb8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        m.put_rgb(2, 2, 255, 0, 0);
        let blurred = mean_blur(&m.into(), 3, 3).unwrap();
        let (r, g, b) = blurred.rgb_at(2, 2);
        assert!(r > 0);
        assert_eq!((g, b), (0, 0));
    }
}
