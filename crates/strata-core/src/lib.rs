//! Core types for the strata attribute-extraction workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other crate: object identifiers,
//! positions and grid indices, domain and template tags, and the
//! semantic roles of extraction inputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod geometry;
pub mod id;
pub mod role;

pub use domain::{Domain, Template};
pub use geometry::{Index3, IndexDouble3, LateralKey, Point3, SampleRounding};
pub use id::{
    CollectionId, FaultId, HorizonId, LineId, ProjectGeneration, PropertyId, SurveyId, VolumeId,
};
pub use role::InputRole;
