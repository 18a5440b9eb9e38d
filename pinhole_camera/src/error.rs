//! Error types for the pinhole camera library
//!
//! This module defines the error types used throughout the crate.
//! Both variants are contract violations that surface immediately at
//! the call site; there are no recoverable runtime states.

use std::fmt;

/// Result type for pinhole camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pinhole camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A resolution dimension is zero at construction.
    ///
    /// Rejected at construction time: a zero dimension would later
    /// divide by zero in the pixel step computation.
    InvalidResolution {
        /// Requested horizontal pixel count
        width: u32,
        /// Requested vertical pixel count
        height: u32,
    },

    /// A pixel ray was requested before any canvas computation
    UninitializedCanvas,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidResolution { width, height } => {
                write!(f, "Invalid resolution: {}x{} (both dimensions must be non-zero)", width, height)
            }
            Error::UninitializedCanvas => {
                write!(f, "Canvas not computed. Call Camera::canvas_size() first.")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
