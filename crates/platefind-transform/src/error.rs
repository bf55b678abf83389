//! Error types for platefind-transform

use thiserror::Error;

/// Errors that can occur during geometric transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] platefind_core::Error),

    /// Invalid transform parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
