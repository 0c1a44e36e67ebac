//! Occupancy grid used during one suppression run.

use crate::footprint::Footprint;
use crate::util::{RfiMaskError, RfiMaskResult};

/// Square grid of claimed cells; cells only ever go from unclaimed to claimed.
pub struct OccupancyGrid {
    size: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates an all-unclaimed `size x size` grid.
    pub fn new(size: usize) -> RfiMaskResult<Self> {
        let cells = size
            .checked_mul(size)
            .ok_or(RfiMaskError::InvalidDimensions {
                width: size,
                height: size,
            })?;
        Ok(Self {
            size,
            cells: vec![false; cells],
        })
    }

    /// Returns the linear size of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `(row, col)` has been claimed. Out-of-range cells are
    /// reported as unclaimed.
    pub fn is_claimed(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }

    /// Claims every in-range cell covered by `footprint` translated to
    /// `(row, col)`. Returns how many cells were newly claimed.
    pub fn claim(&mut self, row: usize, col: usize, footprint: &Footprint) -> usize {
        let mut newly = 0;
        for offset in footprint.offsets() {
            if let Some((r, c)) = offset.apply(row, col, self.size) {
                let cell = &mut self.cells[r * self.size + c];
                if !*cell {
                    *cell = true;
                    newly += 1;
                }
            }
        }
        newly
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
