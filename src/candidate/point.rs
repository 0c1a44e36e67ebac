//! Candidate detections.

use std::cmp::Ordering;

use crate::util::{RfiMaskError, RfiMaskResult};

/// Candidate detection in image space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Row index of the candidate pixel.
    pub row: usize,
    /// Column index of the candidate pixel.
    pub col: usize,
    /// Detection value used for ordering.
    pub value: f64,
}

impl Point {
    /// Creates a candidate at `(row, col)` with `value`.
    pub const fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }

    /// Zips parallel position and value lists into points.
    pub fn from_parallel(
        positions: &[(usize, usize)],
        values: &[f64],
    ) -> RfiMaskResult<Vec<Self>> {
        if positions.len() != values.len() {
            return Err(RfiMaskError::LengthMismatch {
                left: positions.len(),
                right: values.len(),
            });
        }
        Ok(positions
            .iter()
            .zip(values)
            .map(|(&(row, col), &value)| Self::new(row, col, value))
            .collect())
    }
}

fn point_cmp_desc(a: &Point, b: &Point) -> Ordering {
    b.value.total_cmp(&a.value)
}

/// Sorts points by descending value; equal values keep their input order.
pub(crate) fn sort_points_desc(points: &mut [Point]) {
    points.sort_by(point_cmp_desc);
}
