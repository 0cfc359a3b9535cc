//! The core `Volume` trait and `dyn Volume` downcast support.

use std::any::Any;

use strata_core::{Domain, Index3, IndexDouble3, Point3, SurveyId, Template};

use crate::trace::Trace;

/// Read-only accessor for a discretized 3D seismic volume.
///
/// Every extraction reads samples through this trait. Concrete backends
/// ([`SeismicCube`](crate::SeismicCube), or a host-provided adapter)
/// define the geometry and storage.
///
/// # Contract
///
/// - Indices are zero-based; a position maps to exactly one fractional
///   index triple, deterministically.
/// - [`trace`](Self::trace) returns `None` for any lateral index outside
///   `[0, NumI) x [0, NumJ)`; it never panics.
/// - A volume is immutable for the lifetime of any extraction reading it.
///
/// `Sync` is required because projects share volumes via `Arc<dyn Volume>`.
pub trait Volume: Any + Send + Sync + 'static {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Vertical domain of the samples.
    fn domain(&self) -> Domain;

    /// Template of the sampled quantity.
    fn template(&self) -> &Template;

    /// Survey (lateral grid) this volume belongs to.
    fn survey(&self) -> SurveyId;

    /// Grid extents `(NumI, NumJ, NumK)`.
    fn num_samples_ijk(&self) -> Index3;

    /// Fractional grid index of a world position.
    ///
    /// Never fails; positions outside the volume map to indices outside
    /// the extents.
    fn index_at_position(&self, position: Point3) -> IndexDouble3;

    /// Trace at lateral cell `(i, j)`, or `None` when out of range.
    fn trace(&self, i: i64, j: i64) -> Option<Trace<'_>>;

    /// Returns `true` if `(i, j)` addresses a lateral cell of this volume.
    fn contains_lateral(&self, i: i64, j: i64) -> bool {
        let n = self.num_samples_ijk();
        i >= 0 && j >= 0 && i < n.i && j < n.j
    }

    /// Returns `true` if `k` addresses a sample of every trace.
    fn contains_depth(&self, k: i64) -> bool {
        k >= 0 && k < self.num_samples_ijk().k
    }
}

impl dyn Volume {
    /// Attempt to downcast a trait object to a concrete volume type.
    pub fn downcast_ref<T: Volume>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
