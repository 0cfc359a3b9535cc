//! Attribute extraction for strata.
//!
//! Three operations read a [`Volume`](strata_grid::Volume) and write
//! property surfaces in a [`Project`](strata_store::Project), each inside
//! its own transaction:
//!
//! | Operation | Writes |
//! |-----------|--------|
//! | [`extract_horizon_attribute`] | one property on a horizon projection |
//! | [`interpolate_between_horizons`] | one property per offset on the primary horizon |
//! | [`propagate_fault_attribute`] | one keyed property on every fault in the tree |
//!
//! All of them map a record's position to the nearest grid node and
//! range-check it before reading ([`sample_records`]); misses leave the
//! value undefined and are only counted.
//!
//! [`AmplitudeWorkstep`] chains horizon extraction and fault propagation
//! the way a host workflow runs them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fault;
pub mod horizon;
pub mod interpolate;
pub mod report;
pub mod sampler;
pub mod workstep;

pub use config::{
    ConfigError, FaultPropagation, HorizonExtraction, HorizonInterpolation, OffsetSet,
    WorkstepArguments, DEFAULT_FAULT_PROPERTY_NAME,
};
pub use error::ExtractError;
pub use fault::{propagate_fault_attribute, FaultPropagator};
pub use horizon::extract_horizon_attribute;
pub use interpolate::{interpolate_between_horizons, interpolated_depth, lateral_depth_map};
pub use report::{
    HorizonExtractionReport, InterpolationOutput, InterpolationReport, PropagationReport,
    WorkstepReport,
};
pub use sampler::{sample_records, SampleStats};
pub use workstep::{AmplitudeWorkstep, OperationInfo, WORKSTEP_INFO};
