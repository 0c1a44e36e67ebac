//! Sigma-to-intensity threshold resolution on sampled cumulative curves.

use crate::trace::{trace_event, trace_span};
use crate::util::math::normal_cdf;
use crate::util::{RfiMaskError, RfiMaskResult};

/// Cumulative value of a standard normal at `sigma` standard deviations.
pub fn reference_cumulative(sigma: f64) -> f64 {
    normal_cdf(sigma)
}

/// Finds the intensity whose cumulative value is closest to
/// `reference_cumulative(target_sigma)`.
///
/// The first sample attaining the minimum distance wins. Grid samples are
/// treated as left bin edges, so half of the spacing `x_grid[2] - x_grid[1]`
/// is added to the selected sample.
pub fn resolve_threshold(cdf: &[f64], x_grid: &[f64], target_sigma: f64) -> RfiMaskResult<f64> {
    let _span = trace_span!("resolve_threshold", target_sigma).entered();

    if !target_sigma.is_finite() {
        return Err(RfiMaskError::InvalidParameter {
            name: "target_sigma",
            value: target_sigma,
        });
    }
    if cdf.len() != x_grid.len() {
        return Err(RfiMaskError::LengthMismatch {
            left: cdf.len(),
            right: x_grid.len(),
        });
    }
    if x_grid.len() < 3 {
        return Err(RfiMaskError::InvalidInput(
            "threshold grid needs at least 3 samples",
        ));
    }

    let target = reference_cumulative(target_sigma);
    let mut best_idx = None;
    let mut best_diff = f64::INFINITY;
    for (idx, &value) in cdf.iter().enumerate() {
        let diff = (value - target).abs();
        if diff < best_diff {
            best_diff = diff;
            best_idx = Some(idx);
        }
    }
    let idx = best_idx.ok_or(RfiMaskError::InvalidInput(
        "cumulative curve has no finite samples",
    ))?;

    let spacing = x_grid[2] - x_grid[1];
    let threshold = x_grid[idx] + 0.5 * spacing;
    trace_event!("threshold", index = idx, target = target, threshold = threshold);
    Ok(threshold)
}

/// Seed and flood-fill intensity thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdPair {
    /// High-confidence cutoff anchoring detections.
    pub seed: f64,
    /// Lower cutoff used to grow detected regions.
    pub flood_fill: f64,
}

/// Sampled cumulative curve: `cdf[i]` is the cumulative value at `x[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CdfCurve {
    x: Vec<f64>,
    cdf: Vec<f64>,
}

impl CdfCurve {
    /// Pairs an x-grid with its cumulative values.
    pub fn new(x: Vec<f64>, cdf: Vec<f64>) -> RfiMaskResult<Self> {
        if x.len() != cdf.len() {
            return Err(RfiMaskError::LengthMismatch {
                left: x.len(),
                right: cdf.len(),
            });
        }
        Ok(Self { x, cdf })
    }

    pub(crate) fn from_parts_unchecked(x: Vec<f64>, cdf: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), cdf.len());
        Self { x, cdf }
    }

    /// Grid samples.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Cumulative values.
    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Resolves the intensity for `target_sigma`.
    pub fn resolve(&self, target_sigma: f64) -> RfiMaskResult<f64> {
        resolve_threshold(&self.cdf, &self.x, target_sigma)
    }

    /// Resolves the seed and flood-fill thresholds together.
    pub fn resolve_pair(&self, seed_sigma: f64, flood_sigma: f64) -> RfiMaskResult<ThresholdPair> {
        Ok(ThresholdPair {
            seed: self.resolve(seed_sigma)?,
            flood_fill: self.resolve(flood_sigma)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{reference_cumulative, resolve_threshold, CdfCurve};
    use crate::util::RfiMaskError;

    #[test]
    fn reference_cumulative_is_normal_cdf() {
        assert!((reference_cumulative(0.0) - 0.5).abs() < 1e-6);
        assert!((reference_cumulative(3.0) - 0.998_650_102).abs() < 1e-6);
    }

    #[test]
    fn first_minimum_wins_on_ties() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let cdf = [0.2, 0.45, 0.45, 0.8];
        let t = resolve_threshold(&cdf, &x, 0.0).unwrap();
        assert!((t - 1.5).abs() < 1e-12);
    }

    #[test]
    fn half_bin_uses_second_spacing() {
        let x = [0.0, 5.0, 7.0, 9.0];
        let cdf = [0.1, 0.3, 0.5, 0.9];
        let t = resolve_threshold(&cdf, &x, 0.0).unwrap();
        assert!((t - 8.0).abs() < 1e-12);
    }

    #[test]
    fn nan_samples_never_win() {
        let x = [0.0, 1.0, 2.0];
        let cdf = [f64::NAN, 0.9, 0.95];
        let t = resolve_threshold(&cdf, &x, 0.0).unwrap();
        assert!((t - 1.5).abs() < 1e-12);

        let err = resolve_threshold(&[f64::NAN; 3], &x, 0.0).unwrap_err();
        assert!(matches!(err, RfiMaskError::InvalidInput(_)));
    }

    #[test]
    fn rejects_short_or_mismatched_grids() {
        assert_eq!(
            resolve_threshold(&[0.1, 0.9], &[0.0, 1.0], 1.0).unwrap_err(),
            RfiMaskError::InvalidInput("threshold grid needs at least 3 samples")
        );
        assert_eq!(
            CdfCurve::new(vec![0.0, 1.0], vec![0.5]).unwrap_err(),
            RfiMaskError::LengthMismatch { left: 2, right: 1 }
        );
        assert!(matches!(
            resolve_threshold(&[0.1, 0.5, 0.9], &[0.0, 1.0, 2.0], f64::INFINITY),
            Err(RfiMaskError::InvalidParameter { .. })
        ));
    }
}
