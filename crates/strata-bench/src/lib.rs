//! Benchmark profiles for the strata extraction workspace.
//!
//! - [`survey_profile`]: a 200x200x250 noise cube with two undulating
//!   horizons projected onto its survey (40K nodes each)
//! - [`fault_forest_profile`]: a collection tree of configurable depth
//!   and fan-out, each node holding a few vertical fault sticks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::{Domain, HorizonId, IndexDouble3, SurveyId, VolumeId};
use strata_grid::{IndexTransform, SeismicCube};
use strata_store::{FaultPolyline, Project};

/// Lateral extent of the benchmark survey.
pub const SURVEY_NI: u32 = 200;
/// Crossline extent of the benchmark survey.
pub const SURVEY_NJ: u32 = 200;
/// Samples per trace.
pub const SURVEY_NK: u32 = 250;

/// A project with one cube and two horizons over the whole survey.
pub struct SurveyProfile {
    pub project: Project,
    pub volume: VolumeId,
    pub upper: HorizonId,
    pub lower: HorizonId,
}

fn noise_cube(rng: &mut ChaCha8Rng) -> Result<SeismicCube, strata_grid::GridError> {
    let len = (SURVEY_NI * SURVEY_NJ * SURVEY_NK) as usize;
    let samples = (0..len).map(|_| rng.random_range(-1.0f32..1.0)).collect();
    let transform = IndexTransform::new(
        strata_core::Point3::new(500_000.0, 6_000_000.0, 0.0),
        (12.5, 0.0),
        (0.0, 12.5),
        4.0,
    )?;
    SeismicCube::builder()
        .name("bench")
        .transform(transform)
        .extents(SURVEY_NI, SURVEY_NJ, SURVEY_NK)
        .samples(samples)
        .build()
}

/// Build the [`SurveyProfile`] for `seed`.
pub fn survey_profile(seed: u64) -> SurveyProfile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cube = noise_cube(&mut rng).expect("benchmark geometry is valid");
    let transform = cube.transform().clone();
    let surface = |base: f64, amp: f64| {
        let mut points = Vec::with_capacity((SURVEY_NI * SURVEY_NJ) as usize);
        for i in 0..SURVEY_NI {
            for j in 0..SURVEY_NJ {
                let k = base + amp * ((i as f64) / 17.0).sin() * ((j as f64) / 23.0).cos();
                points.push(transform.position_at(IndexDouble3::new(i as f64, j as f64, k)));
            }
        }
        points
    };

    let mut b = Project::builder("survey profile");
    let volume = b.add_volume(cube);
    let upper = b.add_horizon("Upper", Domain::Time);
    let lower = b.add_horizon("Lower", Domain::Time);
    b.add_projection(upper, SurveyId(0), surface(60.0, 20.0))
        .expect("fresh horizon");
    b.add_projection(lower, SurveyId(0), surface(180.0, 35.0))
        .expect("fresh horizon");
    SurveyProfile {
        project: b.build(),
        volume,
        upper,
        lower,
    }
}

/// Build a fault forest: `depth` levels, `fan_out` children per node,
/// `faults_per_node` faults per node, each a 20-point vertical stick at
/// a random lateral node of a 100x100x100 cube.
pub fn fault_forest_profile(
    seed: u64,
    depth: usize,
    fan_out: usize,
    faults_per_node: usize,
) -> (Project, VolumeId) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cube = SeismicCube::builder()
        .name("forest")
        .extents(100, 100, 100)
        .samples_from_fn(|i, j, k| (i + j + k) as f32)
        .build()
        .expect("benchmark geometry is valid");
    let mut b = Project::builder("fault forest");
    let volume = b.add_volume(cube);

    let mut level = vec![b.add_collection(None, "root").expect("root")];
    for d in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fan_out);
        for &parent in &level {
            for n in 0..faults_per_node {
                let (i, j) = (rng.random_range(0..100), rng.random_range(0..100));
                let top = rng.random_range(0..80);
                let stick = FaultPolyline::from_positions(
                    (top..top + 20).map(|k| strata_core::Point3::new(i as f64, j as f64, k as f64)),
                );
                b.add_fault(parent, format!("F{d}-{n}"), Domain::Time, vec![stick])
                    .expect("parent exists");
            }
            for c in 0..fan_out {
                next.push(
                    b.add_collection(Some(parent), format!("L{d}-{c}"))
                        .expect("parent exists"),
                );
            }
        }
        level = next;
    }
    (b.build(), volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forest_has_expected_fault_count() {
        let (p, _) = fault_forest_profile(7, 3, 2, 2);
        // Levels 0..3 hold 1 + 2 + 4 nodes with faults.
        assert_eq!(p.faults().count(), 14);
        assert_eq!(p.collection_count(), 15);
    }

    #[test]
    fn forest_is_deterministic() {
        let (a, _) = fault_forest_profile(42, 2, 2, 1);
        let (b, _) = fault_forest_profile(42, 2, 2, 1);
        assert_eq!(strata_store::project_hash(&a), strata_store::project_hash(&b));
    }
}
