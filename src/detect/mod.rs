//! High-level detection facade.
//!
//! `Detector` bundles a precomputed footprint with a `DetectionConfig` so the
//! suppression pass and the seed/flood-fill threshold lookup share one set of
//! tuning parameters.

use crate::candidate::point::Point;
use crate::candidate::suppress::suppress;
use crate::distribution::{SkewNormal, ThresholdPair};
use crate::footprint::{build_footprint, Footprint, DEFAULT_SIDELOBE_FACTOR};
use crate::image::ImageView;
use crate::util::RfiMaskResult;

/// Tuning parameters for sidelobe suppression and threshold resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectionConfig {
    /// Multiple of the PSF standard deviation a sidelobe must exceed.
    pub sidelobe_factor: f64,
    /// Confidence level (sigma) of the seed threshold.
    pub seed_sigma: f64,
    /// Confidence level (sigma) of the flood-fill threshold.
    pub flood_sigma: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sidelobe_factor: DEFAULT_SIDELOBE_FACTOR,
            seed_sigma: 6.0,
            flood_sigma: 3.0,
        }
    }
}

/// Sidelobe-aware detector over square images of one size.
pub struct Detector {
    footprint: Footprint,
    cfg: DetectionConfig,
}

impl Detector {
    /// Creates a detector around a precomputed footprint with default config.
    pub fn new(footprint: Footprint) -> Self {
        Self {
            footprint,
            cfg: DetectionConfig::default(),
        }
    }

    /// Builds the footprint of a `size x size` PSF using `cfg.sidelobe_factor`.
    pub fn from_psf(
        psf: ImageView<'_, f32>,
        size: usize,
        cfg: DetectionConfig,
    ) -> RfiMaskResult<Self> {
        let footprint = build_footprint(psf, size, cfg.sidelobe_factor)?;
        Ok(Self { footprint, cfg })
    }

    /// Replaces the detection configuration.
    pub fn with_config(mut self, cfg: DetectionConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DetectionConfig {
        &self.cfg
    }

    /// Returns the sidelobe footprint.
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Suppresses sidelobe duplicates among `points`.
    pub fn suppress(&self, points: &[Point], image_size: usize) -> RfiMaskResult<Vec<Point>> {
        suppress(points, &self.footprint, image_size)
    }

    /// Suppresses several images' candidates in parallel.
    #[cfg(feature = "rayon")]
    pub fn suppress_batch<P>(
        &self,
        jobs: &[P],
        image_size: usize,
    ) -> RfiMaskResult<Vec<Vec<Point>>>
    where
        P: AsRef<[Point]> + Sync,
    {
        crate::batch::suppress_batch(jobs, &self.footprint, image_size)
    }

    /// Resolves the seed and flood-fill thresholds of `model` on `x_grid`.
    pub fn thresholds(&self, model: &SkewNormal, x_grid: &[f64]) -> RfiMaskResult<ThresholdPair> {
        model
            .sample_cdf(x_grid)
            .resolve_pair(self.cfg.seed_sigma, self.cfg.flood_sigma)
    }
}
