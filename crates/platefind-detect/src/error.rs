//! Error types for platefind-detect

use thiserror::Error;

/// Errors that can occur during classification and detection
#[derive(Debug, Error)]
pub enum DetectError {
    /// The input mask or image is unusable (wrong format)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] platefind_core::Error),

    /// Color processing error
    #[error("color error: {0}")]
    Color(#[from] platefind_color::ColorError),

    /// Filtering error
    #[error("filter error: {0}")]
    Filter(#[from] platefind_filter::FilterError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] platefind_morph::MorphError),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] platefind_region::RegionError),
}

/// Result type for detection operations
pub type DetectResult<T> = Result<T, DetectError>;
