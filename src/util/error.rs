//! Error types for rfimask.

use thiserror::Error;

/// Result alias for rfimask operations.
pub type RfiMaskResult<T> = std::result::Result<T, RfiMaskError>;

/// Errors that can occur when building footprints, suppressing candidates or
/// resolving thresholds.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RfiMaskError {
    /// A numeric parameter is out of its valid domain.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// The input data is unusable for the requested operation.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Width or height is zero, or the dimensions do not match what was asked for.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer cannot hold the described view.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Two parallel sequences have different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// A candidate lies outside the occupancy grid.
    #[error("point ({row}, {col}) outside {size}x{size} grid")]
    PointOutOfBounds { row: usize, col: usize, size: usize },
}
