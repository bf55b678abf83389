//! platefind-filter - Convolution and smoothing for the platefind toolkit
//!
//! Provides a general kernel convolution plus the two smoothing filters the
//! detection pipeline uses:
//!
//! - [`mean_blur`] - box averaging
//! - [`gaussian_blur`] - Gaussian smoothing

pub mod convolve;
pub mod error;
pub mod kernel;

pub use convolve::{convolve, gaussian_blur, mean_blur};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
