//! Error types for faultline.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`TerrainError`].
pub type Result<T> = std::result::Result<T, TerrainError>;

/// Errors that can occur during terrain construction.
///
/// Terrain generation is pure in-memory computation, so the taxonomy is
/// small: both variants describe an invalid construction domain and are
/// fatal to that construction attempt. No partial mesh is ever returned.
///
/// Accessor calls with an out-of-range id are programmer errors and panic
/// rather than producing an error value.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// The subdivision count is too small to form any grid cell.
    #[error("terrain needs at least 1 subdivision, got {div}")]
    InvalidSubdivisions {
        /// The rejected subdivision count.
        div: usize,
    },

    /// The domain rectangle has zero or negative extent along an axis.
    #[error("degenerate domain rectangle [{min_x}, {max_x}] x [{min_y}, {max_y}]")]
    DegenerateDomain {
        /// Minimum X coordinate of the rejected rectangle.
        min_x: f64,
        /// Maximum X coordinate of the rejected rectangle.
        max_x: f64,
        /// Minimum Y coordinate of the rejected rectangle.
        min_y: f64,
        /// Maximum Y coordinate of the rejected rectangle.
        max_y: f64,
    },
}
