use rfimask::lowlevel::OccupancyGrid;
use rfimask::{build_footprint, Footprint, ImageView, Offset, Point, RfiMaskError};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [0.0f32; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        RfiMaskError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride_and_small_buffer() {
    let data = [0.0f32; 8];
    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        RfiMaskError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );

    let err = ImageView::new(&data[..3], 2, 2, 2).err().unwrap();
    assert_eq!(err, RfiMaskError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn all_zero_psf_yields_empty_footprint() {
    let data = [0.0f32; 25];
    let psf = ImageView::from_slice(&data, 5, 5).unwrap();
    let footprint = build_footprint(psf, 5, 3.0).unwrap();
    assert!(footprint.is_empty());
}

#[test]
fn center_only_psf_yields_self_offset() {
    let size = 9;
    let mut data = vec![0.0f32; size * size];
    data[(size / 2) * size + size / 2] = 1.0;
    let psf = ImageView::from_slice(&data, size, size).unwrap();

    let footprint = build_footprint(psf, size, 3.0).unwrap();
    assert_eq!(footprint, Footprint::self_only());
    assert_eq!(footprint.offsets(), &[Offset::new(0, 0)]);
}

#[test]
fn even_sized_psf_centers_on_floor_half() {
    let size = 4;
    let mut data = vec![0.0f32; size * size];
    data[0] = 1.0;
    data[2 * size + 2] = 1.0;
    let psf = ImageView::from_slice(&data, size, size).unwrap();

    let footprint = build_footprint(psf, size, 1.0).unwrap();
    assert_eq!(
        footprint.offsets(),
        &[Offset::new(-2, -2), Offset::new(0, 0)]
    );
}

#[test]
fn occupancy_grid_only_grows() {
    let footprint = Footprint::from_offsets([Offset::new(0, 0), Offset::new(1, 1)]);
    let mut grid = OccupancyGrid::new(3).unwrap();
    assert_eq!(grid.size(), 3);
    assert_eq!(grid.claim(1, 1, &footprint), 2);
    assert_eq!(grid.claim(1, 1, &footprint), 0);
    assert_eq!(grid.claimed_count(), 2);
}

#[test]
fn point_from_parallel_zips_lists() {
    let points = Point::from_parallel(&[(1, 2), (3, 4)], &[0.5, 1.5]).unwrap();
    assert_eq!(points, vec![Point::new(1, 2, 0.5), Point::new(3, 4, 1.5)]);
}
