//! Bounds-checked trace access.

use strata_core::Index3;

use crate::volume::Volume;

/// The ordered samples of one lateral `(I, J)` cell, indexed by `K`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trace<'a> {
    samples: &'a [f32],
}

impl<'a> Trace<'a> {
    /// Wrap a sample slice as a trace.
    pub fn new(samples: &'a [f32]) -> Self {
        Self { samples }
    }

    /// Sample at depth index `k`, or `None` when `k` is out of range.
    pub fn sample(&self, k: i64) -> Option<f32> {
        let k = usize::try_from(k).ok()?;
        self.samples.get(k).copied()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the trace has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The underlying samples.
    pub fn as_slice(&self) -> &'a [f32] {
        self.samples
    }
}

/// Outcome of sampling a volume at an integer index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// The index was inside the volume.
    Value(f32),
    /// `(I, J)` was outside `[0, NumI) x [0, NumJ)`.
    LateralMiss,
    /// The trace exists but `K` was outside `[0, NumK)`.
    DepthMiss,
}

impl Sample {
    /// The sampled value, if any.
    pub fn value(self) -> Option<f32> {
        match self {
            Self::Value(v) => Some(v),
            Self::LateralMiss | Self::DepthMiss => None,
        }
    }
}

/// Sample `volume` at `index`, range-checking the lateral cell before
/// fetching the trace and the depth index before reading it.
pub fn sample_at(volume: &dyn Volume, index: Index3) -> Sample {
    if !volume.contains_lateral(index.i, index.j) {
        return Sample::LateralMiss;
    }
    let Some(trace) = volume.trace(index.i, index.j) else {
        return Sample::LateralMiss;
    };
    if !volume.contains_depth(index.k) {
        return Sample::DepthMiss;
    }
    match trace.sample(index.k) {
        Some(v) => Sample::Value(v),
        None => Sample::DepthMiss,
    }
}
