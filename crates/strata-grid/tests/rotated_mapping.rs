//! Position-to-sample mapping on rotated, scaled survey geometry.

use proptest::prelude::*;
use strata_core::{Index3, Point3};
use strata_grid::{sample_at, IndexTransform, Sample, SeismicCube, Volume};

fn cube(angle_deg: f64) -> SeismicCube {
    let (s, c) = (angle_deg.to_radians().sin(), angle_deg.to_radians().cos());
    let transform = IndexTransform::new(
        Point3::new(1_000.0, -2_000.0, 500.0),
        (20.0 * c, 20.0 * s),
        (-10.0 * s, 10.0 * c),
        -2.0,
    )
    .unwrap();
    SeismicCube::builder()
        .transform(transform)
        .extents(7, 5, 11)
        .samples_from_fn(|i, j, k| (i * 1000 + j * 10 + k) as f32)
        .build()
        .unwrap()
}

#[test]
fn negative_sample_interval_counts_downwards() {
    let cube = cube(0.0);
    let idx = cube.index_at_position(Point3::new(1_000.0, -2_000.0, 490.0));
    assert_eq!(idx.to_index3(), Some(Index3::new(0, 0, 5)));
    assert_eq!(sample_at(&cube, Index3::new(0, 0, 5)), Sample::Value(5.0));
}

#[test]
fn extents_bound_every_axis() {
    let cube = cube(15.0);
    assert_eq!(sample_at(&cube, Index3::new(6, 4, 10)), Sample::Value(6050.0));
    assert_eq!(sample_at(&cube, Index3::new(7, 0, 0)), Sample::LateralMiss);
    assert_eq!(sample_at(&cube, Index3::new(0, -1, 0)), Sample::LateralMiss);
    assert_eq!(sample_at(&cube, Index3::new(0, 0, 11)), Sample::DepthMiss);
    assert_eq!(sample_at(&cube, Index3::new(0, 0, -1)), Sample::DepthMiss);
}

proptest! {
    #[test]
    fn node_positions_sample_their_own_node(
        angle in -180.0f64..180.0,
        i in -2i64..9,
        j in -2i64..7,
        k in -2i64..13,
    ) {
        let cube = cube(angle);
        let p = cube.position_of(Index3::new(i, j, k));
        let idx = cube.index_at_position(p).to_index3().unwrap();
        prop_assert_eq!(idx, Index3::new(i, j, k));

        let inside = (0..7).contains(&i) && (0..5).contains(&j) && (0..11).contains(&k);
        match sample_at(&cube, idx) {
            Sample::Value(v) => {
                prop_assert!(inside);
                prop_assert_eq!(v, (i * 1000 + j * 10 + k) as f32);
            }
            Sample::LateralMiss | Sample::DepthMiss => prop_assert!(!inside),
        }
    }
}
