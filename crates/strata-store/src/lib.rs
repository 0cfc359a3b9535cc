//! Interpretation project store for strata.
//!
//! A [`Project`] owns the objects extractions read and write: volumes,
//! horizon interpretations and their per-survey projections, fault
//! interpretations, the collection tree that organises faults, and the
//! property surfaces attached to horizons and faults.
//!
//! # Mutation discipline
//!
//! Once built, a project is only mutated through a [`Transaction`]:
//!
//! ```text
//! Project::begin() ─► Transaction
//!                     ├── lock(object)         copy-on-write into staging
//!                     ├── property_mut / set_polylines / create_property
//!                     └── commit()             apply staging, bump generation
//!                         (drop without commit = abandon, project unchanged)
//! ```
//!
//! `begin()` borrows the project mutably, so at most one transaction is
//! open per project at a time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod error;
pub mod fault;
pub mod hash;
pub mod horizon;
pub mod project;
pub mod property;
pub mod transaction;

pub use collection::InterpretationCollection;
pub use error::{StoreError, TxError};
pub use fault::{Context, ContextPoint, FaultInterpretation, FaultPolyline};
pub use hash::project_hash;
pub use horizon::{HorizonInterpretation, HorizonInterpretation3D};
pub use project::{Project, ProjectBuilder};
pub use property::{PropertyOwner, PropertyPointRecord, PropertySurface};
pub use transaction::{CommitSummary, LockState, ObjectRef, Transaction};
