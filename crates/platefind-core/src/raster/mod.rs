//! Raster - the image container
//!
//! `Raster` is the fundamental image type of the toolkit. It stores pixels
//! row-major as bytes, either one byte per pixel (grayscale) or three
//! (RGB, red first).
//!
//! # Binary images
//!
//! There is no dedicated 1-bit type: a binary image is a [`PixelFormat::Gray8`]
//! raster where foreground pixels are nonzero (255 by convention). All mask
//! producers in the workspace write 0/255.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership). To modify
//! pixel data, convert to `RasterMut` via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod clip;

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Pixel storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit single channel (grayscale or binary mask)
    Gray8,
    /// 8-bit three channels, RGB order
    Rgb8,
}

impl PixelFormat {
    /// Number of channels per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb8 => 3,
        }
    }

    /// Bytes needed to store one pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self.channels()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Gray8 => write!(f, "Gray8"),
            PixelFormat::Rgb8 => write!(f, "Rgb8"),
        }
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel storage format
    format: PixelFormat,
    /// Row-major pixel bytes, `height * stride` long
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * self.format.bytes_per_pixel()
    }
}

/// Immutable, cheaply clonable image.
///
/// # Examples
///
/// ```
/// use platefind_core::{PixelFormat, Raster};
///
/// let raster = Raster::new(640, 480, PixelFormat::Gray8).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all pixels zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u8; width as usize * height as usize * format.bytes_per_pixel()];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format,
                data,
            }),
        })
    }

    /// Create a raster from an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::BufferSize`] if `data` is not `width * height * bpp` bytes.
    pub fn from_vec(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format,
                data,
            }),
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Pixel storage format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Whether this raster is single-channel.
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.inner.format == PixelFormat::Gray8
    }

    /// Whether this raster is three-channel RGB.
    #[inline]
    pub fn is_rgb(&self) -> bool {
        self.inner.format == PixelFormat::Rgb8
    }

    /// Raw pixel bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// One row of pixel bytes.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.inner.stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Read one channel of one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside the raster.
    pub fn get(&self, x: u32, y: u32, channel: usize) -> Result<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        Ok(self.inner.data[self.inner.offset(x, y) + channel])
    }

    /// Read one channel of one pixel without bounds checking the coordinates
    /// against an error path. Debug builds still assert.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, channel: usize) -> u8 {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        self.inner.data[self.inner.offset(x, y) + channel]
    }

    /// Read a grayscale pixel. For RGB rasters this reads the red channel.
    #[inline]
    pub fn gray_at(&self, x: u32, y: u32) -> u8 {
        self.get_unchecked(x, y, 0)
    }

    /// Read an RGB pixel.
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let off = self.inner.offset(x, y);
        (
            self.inner.data[off],
            self.inner.data[off + 1],
            self.inner.data[off + 2],
        )
    }

    /// Count pixels whose first channel is nonzero.
    ///
    /// For binary masks this is the foreground pixel count.
    pub fn count_nonzero(&self) -> u64 {
        let bpp = self.inner.format.bytes_per_pixel();
        self.inner.data.chunks_exact(bpp).filter(|p| p[0] != 0).count() as u64
    }

    /// Convert into the mutable form without copying.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SharedBuffer`] if other `Raster` handles share the
    /// pixel data; use [`Raster::to_mut`] to force a copy instead.
    pub fn try_into_mut(self) -> Result<RasterMut> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { data }),
            Err(_) => Err(Error::SharedBuffer),
        }
    }

    /// Copy into the mutable form. The original handle stays valid.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            data: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                format: self.inner.format,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Exclusive, mutable image.
///
/// Created from a [`Raster`] and converted back with `Into<Raster>` once
/// editing is done.
#[derive(Debug)]
pub struct RasterMut {
    data: RasterData,
}

impl RasterMut {
    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.data.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.data.height
    }

    /// Pixel storage format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.data.format
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.data.stride()
    }

    /// Raw pixel bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data.data
    }

    /// Raw mutable pixel bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data.data
    }

    /// One mutable row of pixel bytes.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.data.stride();
        let start = y as usize * stride;
        &mut self.data.data[start..start + stride]
    }

    /// Read one channel of one pixel.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, channel: usize) -> u8 {
        debug_assert!(x < self.data.width && y < self.data.height);
        self.data.data[self.data.offset(x, y) + channel]
    }

    /// Write one channel of one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside the raster.
    pub fn set(&mut self, x: u32, y: u32, channel: usize, value: u8) -> Result<()> {
        if x >= self.data.width || y >= self.data.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.data.width,
                height: self.data.height,
            });
        }
        let off = self.data.offset(x, y) + channel;
        self.data.data[off] = value;
        Ok(())
    }

    /// Write one channel of one pixel without the error path.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, channel: usize, value: u8) {
        debug_assert!(x < self.data.width && y < self.data.height);
        let off = self.data.offset(x, y) + channel;
        self.data.data[off] = value;
    }

    /// Write a grayscale pixel.
    #[inline]
    pub fn put_gray(&mut self, x: u32, y: u32, value: u8) {
        self.set_unchecked(x, y, 0, value);
    }

    /// Write an RGB pixel.
    #[inline]
    pub fn put_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let off = self.data.offset(x, y);
        self.data.data[off] = r;
        self.data.data[off + 1] = g;
        self.data.data[off + 2] = b;
    }

    /// Set every byte of the raster to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.data.fill(value);
    }
}

impl From<RasterMut> for Raster {
    fn from(m: RasterMut) -> Self {
        Raster {
            inner: Arc::new(m.data),
        }
    }
}

pub use clip::crop;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let r = Raster::new(4, 3, PixelFormat::Rgb8).unwrap();
        assert_eq!(r.dimensions(), (4, 3));
        assert_eq!(r.data().len(), 4 * 3 * 3);
        assert!(r.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Raster::new(0, 5, PixelFormat::Gray8).is_err());
        assert!(Raster::new(5, 0, PixelFormat::Gray8).is_err());
    }

    #[test]
    fn test_from_vec_size_check() {
        let err = Raster::from_vec(2, 2, PixelFormat::Gray8, vec![0u8; 3]).unwrap_err();
        assert!(matches!(err, Error::BufferSize { expected: 4, actual: 3 }));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let r = Raster::new(8, 8, PixelFormat::Gray8).unwrap();
        let mut m = r.try_into_mut().unwrap();
        m.put_gray(3, 5, 200);
        let r: Raster = m.into();
        assert_eq!(r.gray_at(3, 5), 200);
        assert_eq!(r.gray_at(0, 0), 0);
        assert_eq!(r.count_nonzero(), 1);
    }

    #[test]
    fn test_try_into_mut_shared() {
        let r = Raster::new(2, 2, PixelFormat::Gray8).unwrap();
        let r2 = r.clone();
        assert!(matches!(r.try_into_mut(), Err(Error::SharedBuffer)));
        // The surviving handle still works
        assert_eq!(r2.width(), 2);
    }

    #[test]
    fn test_to_mut_copies() {
        let r = Raster::new(2, 2, PixelFormat::Gray8).unwrap();
        let mut m = r.to_mut();
        m.put_gray(0, 0, 9);
        assert_eq!(r.gray_at(0, 0), 0);
        let edited: Raster = m.into();
        assert_eq!(edited.gray_at(0, 0), 9);
    }

    #[test]
    fn test_rgb_access() {
        let r = Raster::new(2, 1, PixelFormat::Rgb8).unwrap();
        let mut m = r.try_into_mut().unwrap();
        m.put_rgb(1, 0, 10, 20, 30);
        let r: Raster = m.into();
        assert_eq!(r.rgb_at(1, 0), (10, 20, 30));
    }

    #[test]
    fn test_out_of_bounds_get() {
        let r = Raster::new(2, 2, PixelFormat::Gray8).unwrap();
        assert!(matches!(r.get(2, 0, 0), Err(Error::OutOfBounds { .. })));
    }
}
