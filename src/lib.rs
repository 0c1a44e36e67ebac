//! rfimask locates candidate radio-interference sources in 2D images.
//!
//! Two passes are provided: a greedy, PSF-sidelobe-aware non-maximum
//! suppression over candidate detections, and a skew-normal threshold
//! resolver that maps sigma confidence levels onto pixel intensities.
//! Batch suppression across images is available with the `rayon` feature.

#[cfg(feature = "rayon")]
pub mod batch;
mod candidate;
pub mod detect;
pub mod distribution;
pub mod footprint;
pub mod image;
pub mod lowlevel;
mod trace;
pub mod util;

pub use detect::{DetectionConfig, Detector};
pub use distribution::{
    reference_cumulative, resolve_threshold, skew_normal_cumulative, skew_normal_density,
    CdfCurve, PixelHistogram, SkewNormal, ThresholdPair,
};
pub use footprint::{build_footprint, Footprint, Offset, DEFAULT_SIDELOBE_FACTOR};
pub use image::ImageView;
pub use util::{RfiMaskError, RfiMaskResult};

#[cfg(feature = "rayon")]
pub use batch::suppress_batch;
pub use candidate::point::Point;
pub use candidate::suppress::{suppress, suppress_parallel_lists};
