//! Error types for platefind-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::raster::PixelFormat;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel format does not match what the operation requires
    #[error("pixel format mismatch: expected {expected}, got {actual}")]
    FormatMismatch {
        expected: PixelFormat,
        actual: PixelFormat,
    },

    /// Pixel coordinates outside the raster
    #[error("pixel access out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Provided buffer does not match the expected size
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Raster data is shared and cannot be made mutable in place
    #[error("raster buffer is shared; copy it first")]
    SharedBuffer,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Empty input where content is required
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
