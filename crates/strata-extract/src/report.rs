//! What each extraction did.

use strata_core::{ProjectGeneration, PropertyId};

use crate::error::ExtractError;
use crate::sampler::SampleStats;

/// Result of [`extract_horizon_attribute`](crate::extract_horizon_attribute).
#[derive(Clone, Debug, PartialEq)]
pub struct HorizonExtractionReport {
    /// The property written.
    pub property: PropertyId,
    /// Whether the property was created by this call.
    pub created: bool,
    /// Sampling counters for the property.
    pub stats: SampleStats,
    /// Project generation after commit.
    pub generation: ProjectGeneration,
}

/// One output surface of an interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolationOutput {
    /// Fractional offset between the horizons.
    pub offset: f64,
    /// Property created for this offset.
    pub property: PropertyId,
    /// Sampling counters; only points with a companion depth are visited.
    pub stats: SampleStats,
}

/// Result of [`interpolate_between_horizons`](crate::interpolate_between_horizons).
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolationReport {
    /// One entry per configured offset, in offset order.
    pub outputs: Vec<InterpolationOutput>,
    /// Points of the primary projection.
    pub points: usize,
    /// Points with no companion depth at their lateral key.
    pub lookup_misses: usize,
    /// Distinct lateral keys found on the companion horizon.
    pub companion_keys: usize,
    /// Project generation after commit.
    pub generation: ProjectGeneration,
}

/// Result of a fault-tree propagation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropagationReport {
    /// Collections visited.
    pub collections_visited: usize,
    /// Faults visited, including skipped ones.
    pub faults_visited: usize,
    /// Faults whose property was (re)sampled.
    pub faults_updated: usize,
    /// Faults skipped for being in another domain.
    pub faults_skipped: usize,
    /// Properties created.
    pub properties_created: usize,
    /// Existing properties reused.
    pub properties_reused: usize,
    /// Sampling counters summed over all updated faults.
    pub stats: SampleStats,
    /// Project generation after commit; zero until committed.
    pub generation: ProjectGeneration,
}

/// Result of [`AmplitudeWorkstep::execute`](crate::AmplitudeWorkstep::execute).
///
/// The two stages commit separately, so each carries its own result. The
/// fault stage does not run when the horizon stage was refused.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkstepReport {
    /// Horizon extraction stage.
    pub horizon: Result<HorizonExtractionReport, ExtractError>,
    /// Fault propagation stage; `None` if it did not run.
    pub faults: Option<Result<PropagationReport, ExtractError>>,
}

impl WorkstepReport {
    /// The property written by the horizon stage, if it succeeded.
    pub fn output_property(&self) -> Option<PropertyId> {
        self.horizon.as_ref().ok().map(|r| r.property)
    }

    /// Returns `true` if the fault stage ran, whatever its outcome.
    pub fn fault_stage_ran(&self) -> bool {
        self.faults.is_some()
    }

    /// Returns `true` if both stages succeeded.
    pub fn is_complete(&self) -> bool {
        self.horizon.is_ok() && matches!(self.faults, Some(Ok(_)))
    }
}
