//! Error types for platefind-io

use thiserror::Error;

/// Errors that can occur during image I/O
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] platefind_core::Error),

    /// Underlying filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported or unrecognized image format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Image decode error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Image encode error
    #[error("encode error: {0}")]
    EncodeError(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
