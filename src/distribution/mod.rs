//! Pixel-intensity distributions and sigma-based thresholds.
//!
//! A skew-normal model is sampled on a histogram grid, and the resulting
//! cumulative curve is inverted to turn confidence levels (in sigma units)
//! into intensity thresholds.

pub mod histogram;
pub mod resolve;
pub mod skew_normal;

pub use histogram::PixelHistogram;
pub use resolve::{reference_cumulative, resolve_threshold, CdfCurve, ThresholdPair};
pub use skew_normal::{skew_normal_cumulative, skew_normal_density, SkewNormal};
