//! Equal-width pixel histograms.
//!
//! Produces the left-edge x-grid and the normalized mass that a skew-normal
//! fit and the threshold resolver consume.

use crate::util::{RfiMaskError, RfiMaskResult};

/// Histogram of finite pixel values over equally spaced bins.
#[derive(Clone, Debug)]
pub struct PixelHistogram {
    start: f64,
    bin_width: f64,
    counts: Vec<u64>,
    total: u64,
}

impl PixelHistogram {
    /// Bins the finite entries of `values` into `bins` equal-width bins that
    /// span their minimum and maximum. The maximum lands in the last bin.
    pub fn from_samples(values: &[f32], bins: usize) -> RfiMaskResult<Self> {
        if bins == 0 {
            return Err(RfiMaskError::InvalidInput("histogram needs at least one bin"));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values.iter().filter(|v| v.is_finite()) {
            let v = f64::from(v);
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            return Err(RfiMaskError::InvalidInput("no finite samples to histogram"));
        }

        let span = if max > min { max - min } else { 1.0 };
        let bin_width = span / bins as f64;
        let mut counts = vec![0u64; bins];
        let mut total = 0u64;
        for &v in values.iter().filter(|v| v.is_finite()) {
            let idx = ((f64::from(v) - min) / bin_width) as usize;
            counts[idx.min(bins - 1)] += 1;
            total += 1;
        }

        Ok(Self {
            start: min,
            bin_width,
            counts,
            total,
        })
    }

    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Raw per-bin counts.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of samples that were binned.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Left edge of each bin.
    pub fn x_grid(&self) -> Vec<f64> {
        (0..self.counts.len())
            .map(|i| self.start + self.bin_width * i as f64)
            .collect()
    }

    /// Counts normalized to sum to one.
    pub fn mass(&self) -> Vec<f64> {
        let total = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / total).collect()
    }
}
