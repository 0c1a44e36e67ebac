//! Skew-normal pixel-intensity model.

use crate::distribution::resolve::CdfCurve;
use crate::util::math::{normal_cdf, normal_pdf, owens_t};
use crate::util::{RfiMaskError, RfiMaskResult};

/// Skew-normal distribution parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkewNormal {
    location: f64,
    scale: f64,
    skew: f64,
}

impl SkewNormal {
    /// Creates a model; `scale` must be positive and all parameters finite.
    pub fn new(location: f64, scale: f64, skew: f64) -> RfiMaskResult<Self> {
        if !location.is_finite() {
            return Err(RfiMaskError::InvalidParameter {
                name: "location",
                value: location,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RfiMaskError::InvalidParameter {
                name: "scale",
                value: scale,
            });
        }
        if !skew.is_finite() {
            return Err(RfiMaskError::InvalidParameter {
                name: "skew",
                value: skew,
            });
        }
        Ok(Self {
            location,
            scale,
            skew,
        })
    }

    /// Location parameter.
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Skew (shape) parameter.
    pub fn skew(&self) -> f64 {
        self.skew
    }

    /// Unnormalized density `2/scale * φ(t) * Φ(skew * t)` at one sample.
    pub fn raw_density(&self, x: f64) -> f64 {
        let t = (x - self.location) / self.scale;
        2.0 / self.scale * normal_pdf(t) * normal_cdf(self.skew * t)
    }

    /// Probability mass over the samples in `x`: the density renormalized to
    /// sum to one across the supplied grid.
    pub fn density(&self, x: &[f64]) -> RfiMaskResult<Vec<f64>> {
        let mut values: Vec<f64> = x.iter().map(|&v| self.raw_density(v)).collect();
        if values.is_empty() {
            return Ok(values);
        }
        let total: f64 = values.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(RfiMaskError::InvalidInput(
                "skew-normal density vanishes on the supplied grid",
            ));
        }
        for v in &mut values {
            *v /= total;
        }
        Ok(values)
    }

    /// Cumulative value at one sample, using the skew magnitude.
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale.abs();
        normal_cdf(z) - 2.0 * owens_t(z, self.skew.abs())
    }

    /// Cumulative values over `x`.
    pub fn cumulative(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.cdf(v)).collect()
    }

    /// Samples the cumulative curve on `x_grid`.
    pub fn sample_cdf(&self, x_grid: &[f64]) -> CdfCurve {
        CdfCurve::from_parts_unchecked(x_grid.to_vec(), self.cumulative(x_grid))
    }
}

/// Renormalized skew-normal probability mass over `x`.
pub fn skew_normal_density(
    x: &[f64],
    location: f64,
    scale: f64,
    skew: f64,
) -> RfiMaskResult<Vec<f64>> {
    SkewNormal::new(location, scale, skew)?.density(x)
}

/// Skew-normal cumulative values over `x`.
pub fn skew_normal_cumulative(
    x: &[f64],
    location: f64,
    scale: f64,
    skew: f64,
) -> RfiMaskResult<Vec<f64>> {
    Ok(SkewNormal::new(location, scale, skew)?.cumulative(x))
}

#[cfg(test)]
mod tests {
    use super::{skew_normal_cumulative, skew_normal_density, SkewNormal};
    use crate::util::RfiMaskError;

    fn grid(start: f64, step: f64, n: usize) -> Vec<f64> {
        (0..n).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn rejects_degenerate_scale() {
        for scale in [0.0, -1.0, f64::NAN] {
            let err = SkewNormal::new(0.0, scale, 1.0).unwrap_err();
            assert!(matches!(
                err,
                RfiMaskError::InvalidParameter { name: "scale", .. }
            ));
        }
        assert!(skew_normal_cumulative(&[0.0], 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn density_sums_to_one_on_grid() {
        let x = grid(-5.0, 0.25, 41);
        let mass = skew_normal_density(&x, 0.5, 1.5, 2.0).unwrap();
        let total: f64 = mass.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(mass.iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn positive_skew_shifts_mass_right() {
        let x = grid(-4.0, 0.1, 81);
        let sym = skew_normal_density(&x, 0.0, 1.0, 0.0).unwrap();
        let skewed = skew_normal_density(&x, 0.0, 1.0, 4.0).unwrap();
        let mean = |m: &[f64]| x.iter().zip(m).map(|(a, b)| a * b).sum::<f64>();
        assert!(mean(&sym).abs() < 1e-9);
        assert!(mean(&skewed) > 0.5);
    }

    #[test]
    fn density_on_far_grid_is_an_error() {
        let err = skew_normal_density(&[1e6, 1e6 + 1.0], 0.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RfiMaskError::InvalidInput(_)));
        assert!(skew_normal_density(&[], 0.0, 1.0, 0.0).unwrap().is_empty());
    }

    #[test]
    fn zero_skew_cdf_is_normal_cdf() {
        let model = SkewNormal::new(10.0, 2.0, 0.0).unwrap();
        assert!((model.cdf(10.0) - 0.5).abs() < 1e-6);
        assert!((model.cdf(12.0) - 0.841_344_746).abs() < 1e-6);
    }

    #[test]
    fn cdf_spans_zero_to_one() {
        let model = SkewNormal::new(0.0, 1.0, 3.0).unwrap();
        assert!(model.cdf(-10.0).abs() < 1e-6);
        assert!((model.cdf(10.0) - 1.0).abs() < 1e-6);
    }
}
