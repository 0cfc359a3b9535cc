//! Strata: seismic attribute extraction onto interpretation surfaces.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // A 4x4x16 time cube whose samples equal their depth index.
//! let cube = SeismicCube::builder()
//!     .extents(4, 4, 16)
//!     .samples_from_fn(|_i, _j, k| k as f32)
//!     .build()
//!     .unwrap();
//!
//! let mut builder = Project::builder("demo");
//! let volume = builder.add_volume(cube);
//! let horizon = builder.add_horizon("Top", Domain::Time);
//! builder
//!     .add_projection(horizon, SurveyId(0), vec![Point3::new(1.0, 2.0, 7.2)])
//!     .unwrap();
//! let mut project = builder.build();
//!
//! let report = extract_horizon_attribute(
//!     &mut project,
//!     &HorizonExtraction { volume, horizon, output: None },
//! )
//! .unwrap();
//! let property = project.property(report.property).unwrap();
//! assert_eq!(property.records()[0].value(), 7.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | IDs, geometry, domains, templates, input roles |
//! | [`grid`] | `strata-grid` | `Volume` trait, `SeismicCube`, index transforms, trace sampling |
//! | [`store`] | `strata-store` | Project, interpretations, property surfaces, transactions |
//! | [`extract`] | `strata-extract` | Horizon, interpolation and fault-tree extraction |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and IDs (`strata-core`).
pub use strata_core as types;

/// Seismic volumes and sampling (`strata-grid`).
///
/// Provides the [`grid::Volume`] trait and the in-memory
/// [`grid::SeismicCube`] backend.
pub use strata_grid as grid;

/// Interpretation project store (`strata-store`).
///
/// All mutation goes through a [`store::Transaction`] opened with
/// [`store::Project::begin`].
pub use strata_store as store;

/// Extraction operations (`strata-extract`).
pub use strata_extract as extract;

/// Common imports for typical strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{
        Domain, FaultId, HorizonId, InputRole, Point3, PropertyId, SampleRounding, SurveyId,
        Template, VolumeId,
    };

    // Grid
    pub use strata_grid::{IndexTransform, SeismicCube, Volume};

    // Store
    pub use strata_store::{FaultPolyline, Project, PropertyOwner, Transaction};

    // Extraction
    pub use strata_extract::{
        extract_horizon_attribute, interpolate_between_horizons, propagate_fault_attribute,
        AmplitudeWorkstep, ExtractError, FaultPropagation, HorizonExtraction,
        HorizonInterpolation, OffsetSet, WorkstepArguments,
    };
}
