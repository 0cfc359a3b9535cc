//! Cross-horizon interpolation.
//!
//! For every node of the primary horizon's projection, the companion
//! horizon's fractional depth at the same lateral cell is looked up and
//! the volume is sampled at fixed fractions of the gap between the two.
//! Each offset produces its own property on the primary projection.

use std::collections::HashMap;
use std::sync::Arc;

use strata_core::{Index3, InputRole, LateralKey, Point3, SampleRounding};
use strata_grid::{sample_at, Volume};
use strata_store::{Project, PropertyOwner};

use crate::config::{HorizonInterpolation, OffsetSet};
use crate::error::{ensure_domain, missing, ExtractError};
use crate::report::{InterpolationOutput, InterpolationReport};
use crate::sampler::SampleStats;

const OPERATION: &str = "horizon interpolation";

/// Map each lateral cell to the fractional depth index of `points` there.
///
/// Points are visited once in order; when several map to the same cell
/// the last one wins. Points whose lateral index cannot be rounded are
/// ignored.
pub fn lateral_depth_map(volume: &dyn Volume, points: &[Point3]) -> HashMap<LateralKey, f64> {
    let mut map = HashMap::with_capacity(points.len());
    for &p in points {
        let idx = volume.index_at_position(p);
        if let Some(node) = idx.to_index3() {
            map.insert(node.lateral(), idx.k);
        }
    }
    map
}

/// Depth index a fraction `t` of the way from `k1` towards `k2`.
pub fn interpolated_depth(k1: f64, k2: f64, t: f64) -> f64 {
    k1 - (k1 - k2) * t
}

/// Where one primary node samples, for every offset.
struct NodePlan {
    lateral: LateralKey,
    k1: f64,
    k2: f64,
}

/// Sample a volume between two horizons at configured offsets.
///
/// The companion's depth at each lateral cell comes from
/// [`lateral_depth_map`]. Primary nodes with no companion depth are
/// skipped and stay undefined on every output. Targets are rounded with
/// the request's [`SampleRounding`] and range-checked before sampling.
///
/// # Errors
///
/// - [`ExtractError::MissingInput`] for an absent volume, horizon, or
///   projection of either horizon onto the volume's survey.
/// - [`ExtractError::DomainMismatch`] if either horizon's domain differs
///   from the volume's.
///
/// Both are raised before the transaction opens.
pub fn interpolate_between_horizons(
    project: &mut Project,
    request: &HorizonInterpolation,
) -> Result<InterpolationReport, ExtractError> {
    let volume = project
        .volume(request.volume)
        .map(Arc::clone)
        .ok_or_else(|| missing(OPERATION, InputRole::Volume))?;
    let primary = project
        .horizon(request.primary)
        .ok_or_else(|| missing(OPERATION, InputRole::PrimaryHorizon))?;
    let companion = project
        .horizon(request.companion)
        .ok_or_else(|| missing(OPERATION, InputRole::CompanionHorizon))?;
    ensure_domain(OPERATION, InputRole::PrimaryHorizon, volume.domain(), primary.domain())?;
    ensure_domain(OPERATION, InputRole::CompanionHorizon, volume.domain(), companion.domain())?;

    let survey = volume.survey();
    let (Some(primary_3d), Some(companion_3d)) =
        (primary.resolve(survey), companion.resolve(survey))
    else {
        return Err(missing(OPERATION, InputRole::HorizonProjection));
    };

    let depths = lateral_depth_map(volume.as_ref(), companion_3d.points());
    let primary_points = primary_3d.points();
    let mut lookup_misses = 0;
    let plan: Vec<Option<NodePlan>> = primary_points
        .iter()
        .map(|&p| {
            let idx = volume.index_at_position(p);
            let lateral = idx.to_index3()?.lateral();
            let Some(&k2) = depths.get(&lateral) else {
                lookup_misses += 1;
                return None;
            };
            Some(NodePlan {
                lateral,
                k1: idx.k,
                k2,
            })
        })
        .collect();
    let points = primary_points.len();

    let mut tx = project.begin();
    tx.lock(request.primary)?;
    let owner = PropertyOwner::Horizon {
        horizon: request.primary,
        survey,
    };

    let mut outputs = Vec::with_capacity(request.offsets.len());
    for &t in request.offsets.as_slice() {
        let property = tx.create_named_property(owner, &OffsetSet::label(t), volume.template())?;
        let records = tx.property_mut(property)?.records_mut();
        let mut stats = SampleStats::default();
        for (record, node) in records.iter_mut().zip(&plan) {
            let Some(node) = node else { continue };
            let sample = target_index(node, t, request.rounding).map(|idx| sample_at(volume.as_ref(), idx));
            if let Some(v) = stats.record(sample) {
                record.set_value(v);
            }
        }
        tracing::debug!(
            offset = t,
            property = %property,
            visited = stats.visited,
            sampled = stats.sampled,
            "sampled interpolated property"
        );
        outputs.push(InterpolationOutput {
            offset: t,
            property,
            stats,
        });
    }
    let summary = tx.commit();

    Ok(InterpolationReport {
        outputs,
        points,
        lookup_misses,
        companion_keys: depths.len(),
        generation: summary.generation,
    })
}

fn target_index(node: &NodePlan, t: f64, rounding: SampleRounding) -> Option<Index3> {
    let k = rounding.apply(interpolated_depth(node.k1, node.k2, t))?;
    Some(Index3::new(node.lateral.i, node.lateral.j, k))
}
