//! Single-horizon attribute extraction.

use std::sync::Arc;

use strata_core::InputRole;
use strata_store::{Project, PropertyOwner};

use crate::config::HorizonExtraction;
use crate::error::{ensure_domain, missing, ExtractError};
use crate::report::HorizonExtractionReport;
use crate::sampler::sample_records;

const OPERATION: &str = "horizon extraction";

/// Sample a volume along a horizon.
///
/// Without an output property, one is created on the horizon's
/// projection for the volume's survey, named after and templated by the
/// volume's template. With one, it is locked and overwritten in place.
///
/// # Errors
///
/// - [`ExtractError::MissingInput`] if the volume, the horizon, the
///   supplied output property, or (when creating) the projection is
///   absent.
/// - [`ExtractError::DomainMismatch`] if the horizon's domain differs
///   from the volume's.
///
/// Both are raised before the transaction opens; the project is left
/// untouched.
pub fn extract_horizon_attribute(
    project: &mut Project,
    request: &HorizonExtraction,
) -> Result<HorizonExtractionReport, ExtractError> {
    let volume = project
        .volume(request.volume)
        .map(Arc::clone)
        .ok_or_else(|| missing(OPERATION, InputRole::Volume))?;
    let horizon = project
        .horizon(request.horizon)
        .ok_or_else(|| missing(OPERATION, InputRole::Horizon))?;
    ensure_domain(OPERATION, InputRole::Horizon, volume.domain(), horizon.domain())?;

    let survey = volume.survey();
    match request.output {
        None if horizon.resolve(survey).is_none() => {
            return Err(missing(OPERATION, InputRole::HorizonProjection));
        }
        Some(id) if project.property(id).is_none() => {
            return Err(missing(OPERATION, InputRole::OutputProperty));
        }
        _ => {}
    }

    let mut tx = project.begin();
    let (property, created) = match request.output {
        Some(id) => {
            tx.lock(id)?;
            (id, false)
        }
        None => {
            tx.lock(request.horizon)?;
            let owner = PropertyOwner::Horizon {
                horizon: request.horizon,
                survey,
            };
            (tx.create_property(owner, volume.template())?, true)
        }
    };

    let surface = tx.property_mut(property)?;
    let stats = sample_records(volume.as_ref(), surface.records_mut());
    tracing::debug!(
        horizon = %request.horizon,
        property = %property,
        created,
        visited = stats.visited,
        sampled = stats.sampled,
        "sampled horizon property"
    );
    let summary = tx.commit();

    Ok(HorizonExtractionReport {
        property,
        created,
        stats,
        generation: summary.generation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{Domain, Point3, ProjectGeneration, PropertyId, SurveyId};
    use strata_grid::SeismicCube;
    use strata_store::project_hash;
    use strata_test_utils::fixtures::{grid_points, horizon_project, ramp_cube, ramp_value};

    #[test]
    fn creates_and_fills_a_property() {
        let cube = ramp_cube(4, 4, 20);
        let points = grid_points(&cube, |i, _| 5.0 + i as f64);
        let mut fx = horizon_project(cube, points);
        let report = extract_horizon_attribute(
            &mut fx.project,
            &HorizonExtraction {
                volume: fx.volume,
                horizon: fx.horizon,
                output: None,
            },
        )
        .unwrap();
        assert!(report.created);
        assert_eq!(report.stats.sampled, 16);
        assert_eq!(report.generation, ProjectGeneration(1));

        let p = fx.project.property(report.property).unwrap();
        assert_eq!(p.name(), SeismicCube::DEFAULT_TEMPLATE);
        assert_eq!(p.template().name(), SeismicCube::DEFAULT_TEMPLATE);
        assert_eq!(p.records()[0].value(), ramp_value(0, 0, 5));
        assert_eq!(p.records()[15].value(), ramp_value(3, 3, 8));
        let proj = fx.project.horizon(fx.horizon).unwrap().resolve(SurveyId(0)).unwrap();
        assert_eq!(proj.properties(), &[report.property]);
    }

    #[test]
    fn reuses_supplied_output_and_is_idempotent() {
        let cube = ramp_cube(3, 3, 10);
        let points = grid_points(&cube, |_, _| 4.0);
        let mut fx = horizon_project(cube, points);
        let mut request = HorizonExtraction {
            volume: fx.volume,
            horizon: fx.horizon,
            output: None,
        };
        let first = extract_horizon_attribute(&mut fx.project, &request).unwrap();
        let values: Vec<u32> = fx
            .project
            .property(first.property)
            .unwrap()
            .records()
            .iter()
            .map(|r| r.value().to_bits())
            .collect();

        request.output = Some(first.property);
        let second = extract_horizon_attribute(&mut fx.project, &request).unwrap();
        assert!(!second.created);
        assert_eq!(second.property, first.property);
        assert_eq!(second.stats, first.stats);
        assert_eq!(fx.project.properties().count(), 1);
        let again: Vec<u32> = fx
            .project
            .property(first.property)
            .unwrap()
            .records()
            .iter()
            .map(|r| r.value().to_bits())
            .collect();
        assert_eq!(values, again);
    }

    #[test]
    fn refusals_leave_project_untouched() {
        let cube = ramp_cube(3, 3, 10);
        let points = vec![Point3::new(1.0, 1.0, 1.0)];
        let mut fx = horizon_project(cube, points);
        let before = project_hash(&fx.project);

        let cases = [
            (
                HorizonExtraction {
                    volume: strata_core::VolumeId(404),
                    horizon: fx.horizon,
                    output: None,
                },
                InputRole::Volume,
            ),
            (
                HorizonExtraction {
                    volume: fx.volume,
                    horizon: strata_core::HorizonId(404),
                    output: None,
                },
                InputRole::Horizon,
            ),
            (
                HorizonExtraction {
                    volume: fx.volume,
                    horizon: fx.horizon,
                    output: Some(PropertyId(404)),
                },
                InputRole::OutputProperty,
            ),
        ];
        for (request, role) in cases {
            assert_eq!(
                extract_horizon_attribute(&mut fx.project, &request).unwrap_err(),
                ExtractError::MissingInput { role }
            );
        }
        assert_eq!(project_hash(&fx.project), before);
    }

    #[test]
    fn domain_mismatch_and_missing_projection_are_refused() {
        let depth_cube = SeismicCube::builder()
            .domain(Domain::Depth)
            .survey(SurveyId(3))
            .extents(2, 2, 2)
            .samples(vec![0.0; 8])
            .build()
            .unwrap();
        let mut b = Project::builder("p");
        let volume = b.add_volume(depth_cube);
        let time = b.add_horizon("time", Domain::Time);
        let depth = b.add_horizon("depth", Domain::Depth);
        b.add_projection(depth, SurveyId(0), vec![]).unwrap();
        let mut project = b.build();

        let err = extract_horizon_attribute(
            &mut project,
            &HorizonExtraction {
                volume,
                horizon: time,
                output: None,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ExtractError::DomainMismatch {
                role: InputRole::Horizon,
                volume: Domain::Depth,
                other: Domain::Time,
            }
        );

        let err = extract_horizon_attribute(
            &mut project,
            &HorizonExtraction {
                volume,
                horizon: depth,
                output: None,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ExtractError::MissingInput {
                role: InputRole::HorizonProjection
            }
        );
        assert_eq!(project.generation(), ProjectGeneration(0));
    }
}
