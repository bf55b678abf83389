//! Error types for platefind-region

use platefind_core::PixelFormat;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] platefind_core::Error),

    /// Operation requires a single-channel binary mask
    #[error("binary mask required, got {0}")]
    NotBinary(PixelFormat),

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
