//! Convolution kernels

use crate::error::{FilterError, FilterResult};

/// A 2D convolution kernel with an anchored center.
///
/// Weights are stored row-major. The anchor is the kernel center; odd
/// dimensions keep the output aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    weights: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for even or zero dimensions,
    /// or if `weights` does not hold `width * height` values.
    pub fn new(width: u32, height: u32, weights: Vec<f32>) -> FilterResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be odd and nonzero: {}x{}",
                width, height
            )));
        }
        if weights.len() != (width * height) as usize {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights, got {}",
                width * height,
                weights.len()
            )));
        }
        Ok(Self {
            width,
            height,
            weights,
        })
    }

    /// Normalized box (averaging) kernel.
    pub fn boxcar(width: u32, height: u32) -> FilterResult<Self> {
        let n = (width * height) as usize;
        Self::new(width, height, vec![1.0 / n as f32; n])
    }

    /// Normalized Gaussian kernel.
    ///
    /// When `sigma` is not positive it is derived from the kernel size the
    /// way smoothing filters conventionally do:
    /// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
    pub fn gaussian(width: u32, height: u32, sigma: f32) -> FilterResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be odd and nonzero: {}x{}",
                width, height
            )));
        }

        let sigma_for = |size: u32| -> f32 {
            if sigma > 0.0 {
                sigma
            } else {
                0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
            }
        };
        let sx = sigma_for(width);
        let sy = sigma_for(height);

        let cx = (width / 2) as i32;
        let cy = (height / 2) as i32;
        let mut weights = Vec::with_capacity((width * height) as usize);
        let mut sum = 0.0f32;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let w = (-(dx * dx) / (2.0 * sx * sx) - (dy * dy) / (2.0 * sy * sy)).exp();
                weights.push(w);
                sum += w;
            }
        }
        for w in &mut weights {
            *w /= sum;
        }

        Self::new(width, height, weights)
    }

    /// Kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Weight at kernel position `(kx, ky)`.
    #[inline]
    pub fn weight(&self, kx: u32, ky: u32) -> f32 {
        self.weights[(ky * self.width + kx) as usize]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_dimensions_rejected() {
        assert!(Kernel::boxcar(4, 3).is_err());
        assert!(Kernel::gaussian(3, 2, 1.0).is_err());
    }

    #[test]
    fn test_boxcar_normalized() {
        let k = Kernel::boxcar(5, 5).unwrap();
        assert!((k.sum() - 1.0).abs() < 1e-5);
        assert!((k.weight(0, 0) - 1.0 / 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_normalized_and_peaked() {
        let k = Kernel::gaussian(5, 5, 1.0).unwrap();
        assert!((k.sum() - 1.0).abs() < 1e-5);
        // Center weight dominates corners
        assert!(k.weight(2, 2) > k.weight(0, 0));
    }

    #[test]
    fn test_gaussian_default_sigma() {
        // sigma <= 0 derives from size; must still normalize
        let k = Kernel::gaussian(5, 5, 0.0).unwrap();
        assert!((k.sum() - 1.0).abs() < 1e-5);
    }
}
