//! Borrowed 2D views over row-major sample buffers.
//!
//! `ImageView` wraps a 1D buffer with an explicit stride. The stride counts
//! elements between the starts of consecutive rows, so a stride larger than
//! the width represents padded rows. PSF templates are handed to the
//! footprint builder through this view.

use crate::util::{RfiMaskError, RfiMaskResult};

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> RfiMaskResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> RfiMaskResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(RfiMaskError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a contiguous slice for `row` with length `width`.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.height {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Iterates over rows top to bottom, skipping stride padding.
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.height).filter_map(move |row| self.row(row))
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> RfiMaskResult<usize> {
    if width == 0 || height == 0 {
        return Err(RfiMaskError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(RfiMaskError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(RfiMaskError::InvalidDimensions { width, height })?;
    Ok(needed)
}
