//! Error types for volume construction.

use std::fmt;

/// Errors arising from volume or transform construction.
///
/// Sampling never produces a `GridError`: out-of-range access is a
/// [`Sample`](crate::Sample) miss.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// One of the three extents is zero.
    EmptyExtent {
        /// The offending extents `(ni, nj, nk)`.
        extents: (u32, u32, u32),
    },
    /// The sample buffer length does not equal `ni * nj * nk`.
    SampleCountMismatch {
        /// Required number of samples.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },
    /// The lateral axis vectors are parallel (or zero), so positions
    /// cannot be inverted to indices.
    DegenerateAxes {
        /// Determinant of the lateral axis matrix.
        determinant: f64,
    },
    /// An origin or step component is NaN or infinite.
    NonFiniteGeometry,
    /// The vertical sample interval is zero.
    ZeroSampleInterval,
    /// A required builder input was never set.
    MissingParameter {
        /// Name of the parameter.
        name: &'static str,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { extents } => {
                write!(f, "volume extents {extents:?} must all be non-zero")
            }
            Self::SampleCountMismatch { expected, actual } => {
                write!(f, "expected {expected} samples, got {actual}")
            }
            Self::DegenerateAxes { determinant } => {
                write!(f, "lateral axes are degenerate (determinant {determinant})")
            }
            Self::NonFiniteGeometry => write!(f, "volume geometry must be finite"),
            Self::ZeroSampleInterval => write!(f, "vertical sample interval must be non-zero"),
            Self::MissingParameter { name } => write!(f, "missing parameter: {name}"),
        }
    }
}

impl std::error::Error for GridError {}
