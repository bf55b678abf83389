//! Error types for platefind-morph

use platefind_core::PixelFormat;
use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] platefind_core::Error),

    /// Operation requires a single-channel binary mask
    #[error("binary mask required, got {0}")]
    NotBinary(PixelFormat),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),
}

/// Result type for morphology operations
pub type MorphResult<T> = Result<T, MorphError>;
