//! Error types for platefind-color

use platefind_core::PixelFormat;
use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] platefind_core::Error),

    /// Operation requires an RGB raster
    #[error("RGB raster required, got {0}")]
    NotRgb(PixelFormat),

    /// Operation requires a grayscale raster
    #[error("grayscale raster required, got {0}")]
    NotGray(PixelFormat),

    /// Lower bound exceeds upper bound in a range mask
    #[error("invalid range: lower bound {lo} exceeds upper bound {hi} in channel {channel}")]
    InvalidRange { channel: usize, lo: u8, hi: u8 },

    /// Input rasters have different dimensions
    #[error("size mismatch: {0}x{1} vs {2}x{3}")]
    SizeMismatch(u32, u32, u32, u32),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
