//! Low-level building blocks for custom detection pipelines.
//!
//! These expose the occupancy grid, point ordering and special functions
//! behind the high-level `Detector` API. Most users should prefer
//! `build_footprint`, `suppress` and `CdfCurve`.

pub use crate::candidate::grid::OccupancyGrid;
pub use crate::footprint::Offset;
pub use crate::util::math::{normal_cdf, normal_pdf, owens_t};
