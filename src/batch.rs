//! Rayon-parallel suppression across independent images (feature-gated).
//!
//! Each job owns its own occupancy grid; only the footprint is shared.

use crate::candidate::point::Point;
use crate::candidate::suppress::suppress;
use crate::footprint::Footprint;
use crate::trace::{trace_event, trace_span};
use crate::util::RfiMaskResult;
use rayon::prelude::*;

/// Suppresses every candidate list in `jobs` in parallel.
///
/// Results are returned in job order and equal running [`suppress`] on each
/// list sequentially. If any job fails, one of the job errors is returned.
pub fn suppress_batch<P>(
    jobs: &[P],
    footprint: &Footprint,
    image_size: usize,
) -> RfiMaskResult<Vec<Vec<Point>>>
where
    P: AsRef<[Point]> + Sync,
{
    let _span = trace_span!("suppress_batch", jobs = jobs.len()).entered();

    let results = jobs
        .par_iter()
        .map(|points| suppress(points.as_ref(), footprint, image_size))
        .collect::<RfiMaskResult<Vec<_>>>()?;

    trace_event!(
        "suppress_batch_done",
        kept_total = results.iter().map(Vec::len).sum::<usize>()
    );
    Ok(results)
}
