#![cfg(feature = "rayon")]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rfimask::{suppress, suppress_batch, Detector, Footprint, Offset, Point, RfiMaskError};

fn make_jobs(count: usize, size: usize) -> Vec<Vec<Point>> {
    let mut rng = StdRng::seed_from_u64(99);
    (0..count)
        .map(|_| {
            (0..120)
                .map(|_| {
                    Point::new(
                        rng.random_range(0..size),
                        rng.random_range(0..size),
                        rng.random_range(0.0..50.0),
                    )
                })
                .collect()
        })
        .collect()
}

fn footprint() -> Footprint {
    Footprint::from_offsets(
        (-2..=2).flat_map(|dr| (-2..=2).map(move |dc| Offset::new(dr, dc))),
    )
}

#[test]
fn parallel_batch_matches_sequential() {
    let size = 48;
    let jobs = make_jobs(16, size);
    let footprint = footprint();

    let sequential: Vec<Vec<Point>> = jobs
        .iter()
        .map(|points| suppress(points, &footprint, size).unwrap())
        .collect();
    let parallel = suppress_batch(&jobs, &footprint, size).unwrap();
    assert_eq!(parallel, sequential);

    let detector = Detector::new(footprint);
    assert_eq!(detector.suppress_batch(&jobs, size).unwrap(), sequential);
}

#[test]
fn batch_reports_invalid_job() {
    let jobs = vec![
        vec![Point::new(0, 0, 1.0)],
        vec![Point::new(10, 0, 1.0)],
    ];
    let err = suppress_batch(&jobs, &Footprint::self_only(), 4).unwrap_err();
    assert_eq!(
        err,
        RfiMaskError::PointOutOfBounds {
            row: 10,
            col: 0,
            size: 4
        }
    );
}
