//! Reusable volumes and projects for extraction tests.
//!
//! - [`ramp_cube`]: every sample encodes its own index, so a sampled
//!   value tells a test exactly which node was read.
//! - [`noise_cube`]: seeded pseudo-random amplitudes for benches and
//!   property tests.
//! - [`horizon_project`] / [`fault_tree_project`]: small projects with
//!   one volume and the interpretation objects most tests need.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::{CollectionId, Domain, FaultId, HorizonId, IndexDouble3, Point3, VolumeId};
use strata_grid::{SeismicCube, Volume};
use strata_store::{FaultPolyline, Project};

/// Value stored by [`ramp_cube`] at `(i, j, k)`.
pub fn ramp_value(i: i64, j: i64, k: i64) -> f32 {
    (i * 10_000 + j * 100 + k) as f32
}

/// Time-domain cube with a unit transform where `value = ramp_value(i, j, k)`.
pub fn ramp_cube(ni: u32, nj: u32, nk: u32) -> SeismicCube {
    SeismicCube::builder()
        .name("ramp")
        .extents(ni, nj, nk)
        .samples_from_fn(|i, j, k| ramp_value(i as i64, j as i64, k as i64))
        .build()
        .expect("ramp cube extents must be non-zero")
}

/// Time-domain cube of uniform noise in `[-1, 1)`, reproducible per seed.
pub fn noise_cube(seed: u64, ni: u32, nj: u32, nk: u32) -> SeismicCube {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let len = ni as usize * nj as usize * nk as usize;
    let samples = (0..len).map(|_| rng.random_range(-1.0f32..1.0)).collect();
    SeismicCube::builder()
        .name("noise")
        .extents(ni, nj, nk)
        .samples(samples)
        .build()
        .expect("noise cube extents must be non-zero")
}

/// One point per lateral node of `cube`, at fractional depth index
/// `k(i, j)`.
pub fn grid_points(cube: &SeismicCube, k: impl Fn(i64, i64) -> f64) -> Vec<Point3> {
    let n = cube.num_samples_ijk();
    let mut points = Vec::with_capacity((n.i * n.j) as usize);
    for i in 0..n.i {
        for j in 0..n.j {
            let idx = IndexDouble3::new(i as f64, j as f64, k(i, j));
            points.push(cube.transform().position_at(idx));
        }
    }
    points
}

/// A vertical fault stick at lateral node `(i, j)` running over `ks`.
pub fn fault_stick(cube: &SeismicCube, i: i64, j: i64, ks: impl IntoIterator<Item = i64>) -> FaultPolyline {
    FaultPolyline::from_positions(ks.into_iter().map(|k| {
        cube.transform()
            .position_at(IndexDouble3::new(i as f64, j as f64, k as f64))
    }))
}

/// A project with one volume and one horizon projected onto its survey.
pub struct HorizonFixture {
    pub project: Project,
    pub volume: VolumeId,
    pub horizon: HorizonId,
}

/// Build a [`HorizonFixture`] holding `cube` and a horizon through
/// `points`, in the cube's domain.
pub fn horizon_project(cube: SeismicCube, points: Vec<Point3>) -> HorizonFixture {
    let mut b = Project::builder("horizon fixture");
    let domain = cube.domain();
    let survey = cube.survey();
    let volume = b.add_volume(cube);
    let horizon = b.add_horizon("Top Reservoir", domain);
    b.add_projection(horizon, survey, points)
        .expect("fresh horizon has no projections");
    HorizonFixture {
        project: b.build(),
        volume,
        horizon,
    }
}

/// A project with a two-level fault tree over a 10x10x50 ramp cube.
///
/// ```text
/// "Faults"            (root)
/// ├── F1, F2          sticks at (2, 3) and (6, 1)
/// └── "Nested"
///     └── F3          stick at (8, 8), domain = `nested_domain`
/// "Empty"             (root, no faults)
/// ```
pub struct FaultTreeFixture {
    pub project: Project,
    pub volume: VolumeId,
    pub root: CollectionId,
    pub nested: CollectionId,
    pub empty: CollectionId,
    pub top_faults: [FaultId; 2],
    pub nested_fault: FaultId,
}

/// Build the [`FaultTreeFixture`]; every stick spans `k = 10..15`.
pub fn fault_tree_project(nested_domain: Domain) -> FaultTreeFixture {
    let cube = ramp_cube(10, 10, 50);
    let f1 = fault_stick(&cube, 2, 3, 10..15);
    let f2 = fault_stick(&cube, 6, 1, 10..15);
    let f3 = fault_stick(&cube, 8, 8, 10..15);

    let mut b = Project::builder("fault fixture");
    let volume = b.add_volume(cube);
    let root = b.add_collection(None, "Faults").expect("root");
    let a = b
        .add_fault(root, "F1", Domain::Time, vec![f1])
        .expect("root exists");
    let c = b
        .add_fault(root, "F2", Domain::Time, vec![f2])
        .expect("root exists");
    let nested = b.add_collection(Some(root), "Nested").expect("root exists");
    let nested_fault = b
        .add_fault(nested, "F3", nested_domain, vec![f3])
        .expect("nested exists");
    let empty = b.add_collection(None, "Empty").expect("root");
    FaultTreeFixture {
        project: b.build(),
        volume,
        root,
        nested,
        empty,
        top_faults: [a, c],
        nested_fault,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_reproducible() {
        let a = noise_cube(7, 3, 3, 3);
        let b = noise_cube(7, 3, 3, 3);
        assert_eq!(a.trace(1, 2).unwrap().as_slice(), b.trace(1, 2).unwrap().as_slice());
        assert!(a
            .trace(0, 0)
            .unwrap()
            .as_slice()
            .iter()
            .all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn fault_tree_shape() {
        let fx = fault_tree_project(Domain::Time);
        assert_eq!(fx.project.roots(), &[fx.root, fx.empty]);
        assert_eq!(fx.project.collection(fx.root).unwrap().faults(), &fx.top_faults);
        assert_eq!(fx.project.fault(fx.nested_fault).unwrap().points().count(), 5);
    }
}
