//! Seismic volume grids for strata.
//!
//! This crate defines the [`Volume`] trait, the accessor every extraction
//! reads samples through, along with the concrete [`SeismicCube`] backend.
//!
//! # Index mapping
//!
//! A volume maps a world [`Point3`](strata_core::Point3) to a fractional
//! [`IndexDouble3`](strata_core::IndexDouble3) through an affine
//! [`IndexTransform`]. Rounding to an integer index is a separate, explicit
//! step (see [`SampleRounding`](strata_core::SampleRounding)).
//!
//! # Sampling
//!
//! [`Volume::trace`] and [`Trace::sample`] are checked accessors: an
//! out-of-range lateral or depth index is a miss (`None`), never a panic.
//! [`sample_at`] combines the two checks and reports which one failed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube;
pub mod error;
pub mod trace;
pub mod transform;
pub mod volume;

pub use cube::{CubeBuilder, SeismicCube};
pub use error::GridError;
pub use trace::{sample_at, Sample, Trace};
pub use transform::IndexTransform;
pub use volume::Volume;
