//! Greedy non-maximum suppression over a fixed sidelobe footprint.

use crate::candidate::grid::OccupancyGrid;
use crate::candidate::point::{sort_points_desc, Point};
use crate::footprint::Footprint;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::{RfiMaskError, RfiMaskResult};

/// Suppresses sidelobe duplicates among `points` on a `image_size` square grid.
///
/// Points are visited by descending value (ties keep input order). A point is
/// kept unless an already-kept point's footprint claimed its cell; every kept
/// point then claims its own footprint. Footprint cells that fall outside the
/// grid are ignored. The returned list is in acceptance order.
///
/// Points with a NaN value are not candidates and are dropped.
pub fn suppress(
    points: &[Point],
    footprint: &Footprint,
    image_size: usize,
) -> RfiMaskResult<Vec<Point>> {
    let _span = trace_span!("suppress", candidates = points.len(), image_size).entered();

    if points.is_empty() {
        return Ok(Vec::new());
    }
    if image_size == 0 {
        return Err(RfiMaskError::InvalidDimensions {
            width: 0,
            height: 0,
        });
    }
    if let Some(p) = points
        .iter()
        .find(|p| p.row >= image_size || p.col >= image_size)
    {
        return Err(RfiMaskError::PointOutOfBounds {
            row: p.row,
            col: p.col,
            size: image_size,
        });
    }
    if footprint.is_empty() {
        trace_warn!("empty footprint, every candidate will be kept");
    }

    let mut sorted: Vec<Point> = points.iter().copied().filter(|p| !p.value.is_nan()).collect();
    let dropped = points.len() - sorted.len();
    if dropped > 0 {
        trace_warn!("dropped NaN-valued candidates", dropped = dropped);
    }
    sort_points_desc(&mut sorted);

    let mut grid = OccupancyGrid::new(image_size)?;
    let mut kept = Vec::new();
    for point in sorted {
        if grid.is_claimed(point.row, point.col) {
            continue;
        }
        grid.claim(point.row, point.col, footprint);
        kept.push(point);
    }

    trace_event!(
        "suppress_done",
        kept = kept.len(),
        claimed = grid.claimed_count()
    );
    Ok(kept)
}

/// Runs [`suppress`] on parallel position and value lists.
pub fn suppress_parallel_lists(
    positions: &[(usize, usize)],
    values: &[f64],
    footprint: &Footprint,
    image_size: usize,
) -> RfiMaskResult<Vec<Point>> {
    let points = Point::from_parallel(positions, values)?;
    suppress(&points, footprint, image_size)
}
