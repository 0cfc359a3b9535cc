//! Bounds-checked sampling of a volume onto property records.

use std::fmt;
use std::ops::AddAssign;

use strata_grid::{sample_at, Sample, Volume};
use strata_store::PropertyPointRecord;

/// Per-surface sampling counters.
///
/// `visited == sampled + lateral_misses + depth_misses + unmapped`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Records examined.
    pub visited: usize,
    /// Records overwritten with a sample.
    pub sampled: usize,
    /// Records whose `(I, J)` fell outside the lateral extent.
    pub lateral_misses: usize,
    /// Records whose `K` fell outside the trace.
    pub depth_misses: usize,
    /// Records whose index could not be rounded to an integer
    /// (non-finite geometry or a depth beyond `i64`).
    pub unmapped: usize,
}

impl SampleStats {
    /// Records left untouched by the pass.
    pub fn missed(&self) -> usize {
        self.visited - self.sampled
    }

    pub(crate) fn record(&mut self, sample: Option<Sample>) -> Option<f32> {
        self.visited += 1;
        match sample {
            Some(Sample::Value(v)) => {
                self.sampled += 1;
                Some(v)
            }
            Some(Sample::LateralMiss) => {
                self.lateral_misses += 1;
                None
            }
            Some(Sample::DepthMiss) => {
                self.depth_misses += 1;
                None
            }
            None => {
                self.unmapped += 1;
                None
            }
        }
    }
}

impl AddAssign for SampleStats {
    fn add_assign(&mut self, rhs: Self) {
        self.visited += rhs.visited;
        self.sampled += rhs.sampled;
        self.lateral_misses += rhs.lateral_misses;
        self.depth_misses += rhs.depth_misses;
        self.unmapped += rhs.unmapped;
    }
}

impl fmt::Display for SampleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} sampled ({} lateral, {} depth, {} unmapped misses)",
            self.sampled, self.visited, self.lateral_misses, self.depth_misses, self.unmapped
        )
    }
}

/// Sample `volume` at every record's position.
///
/// Each geometry is mapped to a fractional index, rounded to the nearest
/// node, and range-checked laterally then in depth. A hit overwrites the
/// record's value; a miss leaves it as it was. Records are never added,
/// removed or reordered, and running the pass twice yields the same
/// values as running it once.
pub fn sample_records(volume: &dyn Volume, records: &mut [PropertyPointRecord]) -> SampleStats {
    let mut stats = SampleStats::default();
    for record in records.iter_mut() {
        let index = volume.index_at_position(record.geometry()).to_index3();
        let sample = index.map(|idx| sample_at(volume, idx));
        if let Some(v) = stats.record(sample) {
            record.set_value(v);
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strata_core::Point3;
    use strata_test_utils::fixtures::{ramp_cube, ramp_value};

    fn records(points: &[Point3]) -> Vec<PropertyPointRecord> {
        points.iter().copied().map(PropertyPointRecord::undefined).collect()
    }

    #[test]
    fn hits_read_exact_samples_and_misses_stay_undefined() {
        let cube = ramp_cube(4, 5, 6);
        let mut recs = records(&[
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(3.2, 4.4, 5.4),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 5.0, 0.0),
            Point3::new(2.0, 2.0, 6.0),
            Point3::new(2.0, 2.0, f64::NAN),
        ]);
        let stats = sample_records(&cube, &mut recs);
        assert_eq!(recs[0].value(), ramp_value(1, 2, 3));
        assert_eq!(recs[1].value(), ramp_value(3, 4, 5));
        assert!(recs[2..].iter().all(|r| r.is_undefined()));
        assert_eq!(
            stats,
            SampleStats {
                visited: 6,
                sampled: 2,
                lateral_misses: 2,
                depth_misses: 1,
                unmapped: 1,
            }
        );
        assert_eq!(stats.missed(), 4);
    }

    #[test]
    fn miss_keeps_prior_value() {
        let cube = ramp_cube(2, 2, 2);
        let mut recs = records(&[Point3::new(9.0, 9.0, 0.0)]);
        recs[0].set_value(7.5);
        sample_records(&cube, &mut recs);
        assert_eq!(recs[0].value(), 7.5);
    }

    #[test]
    fn stats_accumulate() {
        let mut a = SampleStats {
            visited: 3,
            sampled: 1,
            lateral_misses: 1,
            depth_misses: 1,
            unmapped: 0,
        };
        a += SampleStats {
            visited: 2,
            sampled: 2,
            ..Default::default()
        };
        assert_eq!(a.visited, 5);
        assert_eq!(a.sampled, 3);
        assert_eq!(a.to_string(), "3/5 sampled (1 lateral, 1 depth, 0 unmapped misses)");
    }

    proptest! {
        #[test]
        fn sampling_is_idempotent_and_exact(
            coords in prop::collection::vec((-3.0f64..9.0, -3.0f64..9.0, -3.0f64..12.0), 0..40),
        ) {
            let cube = ramp_cube(6, 6, 9);
            let points: Vec<Point3> = coords.iter().map(|&(x, y, z)| Point3::new(x, y, z)).collect();
            let mut once = records(&points);
            let stats = sample_records(&cube, &mut once);
            let mut twice = once.clone();
            prop_assert_eq!(sample_records(&cube, &mut twice), stats);

            for (a, b) in once.iter().zip(&twice) {
                prop_assert_eq!(a.value().to_bits(), b.value().to_bits());
            }
            prop_assert_eq!(stats.visited, points.len());
            for (r, p) in once.iter().zip(&points) {
                let (i, j, k) = (p.x.round_ties_even() as i64, p.y.round_ties_even() as i64, p.z.round_ties_even() as i64);
                let inside = (0..6).contains(&i) && (0..6).contains(&j) && (0..9).contains(&k);
                if inside {
                    prop_assert_eq!(r.value(), ramp_value(i, j, k));
                } else {
                    prop_assert!(r.is_undefined());
                }
            }
        }
    }
}
