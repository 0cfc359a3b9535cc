//! The two-stage amplitude workstep.

use strata_core::InputRole;
use strata_store::Project;

use crate::config::{FaultPropagation, HorizonExtraction, WorkstepArguments};
use crate::error::{missing, ExtractError};
use crate::fault::propagate_fault_attribute;
use crate::horizon::extract_horizon_attribute;
use crate::report::WorkstepReport;

const OPERATION: &str = "amplitude workstep";

/// Static description of an operation, for hosts that list them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationInfo {
    /// Stable identifier.
    pub name: &'static str,
    /// One-line summary.
    pub short_description: &'static str,
    /// Full description.
    pub description: &'static str,
}

/// Description of [`AmplitudeWorkstep`].
pub static WORKSTEP_INFO: OperationInfo = OperationInfo {
    name: "AmplitudeExtraction",
    short_description: "Seismic amplitude extraction",
    description: "Extract seismic amplitudes along a horizon, then onto every \
                  fault interpretation in the project",
};

/// Horizon extraction followed by fault propagation.
///
/// The stages use separate transactions: a refused or failed horizon
/// stage does not stop the fault stage, and neither rolls back the other.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmplitudeWorkstep;

impl AmplitudeWorkstep {
    /// The workstep's description.
    pub fn info(&self) -> &'static OperationInfo {
        &WORKSTEP_INFO
    }

    /// Run both stages against `project`.
    ///
    /// A refused horizon stage (missing input or domain mismatch) ends the
    /// call before the fault stage. A horizon stage that fails inside its
    /// transaction does not.
    pub fn execute(&self, project: &mut Project, args: &WorkstepArguments) -> WorkstepReport {
        if let Err(e) = args.validate() {
            let err = ExtractError::from(e);
            tracing::warn!(operation = OPERATION, error = %err, "arguments rejected");
            return WorkstepReport {
                horizon: Err(err),
                faults: None,
            };
        }

        let horizon = match (args.volume, args.horizon) {
            (Some(volume), Some(horizon)) => extract_horizon_attribute(
                project,
                &HorizonExtraction {
                    volume,
                    horizon,
                    output: args.output,
                },
            ),
            (None, _) => Err(missing(OPERATION, InputRole::Volume)),
            (_, None) => Err(missing(OPERATION, InputRole::Horizon)),
        };

        let faults = match (&horizon, args.volume) {
            (Err(e), _) if e.is_refusal() => {
                tracing::debug!(operation = OPERATION, "fault stage not run");
                None
            }
            (_, Some(volume)) => Some(propagate_fault_attribute(
                project,
                &FaultPropagation {
                    volume,
                    property_name: args.fault_property_name.clone(),
                },
            )),
            (_, None) => None,
        };

        tracing::info!(
            horizon_ok = horizon.is_ok(),
            faults_ok = matches!(faults, Some(Ok(_))),
            generation = project.generation().0,
            "workstep finished"
        );
        WorkstepReport { horizon, faults }
    }
}
