//! Positions, fractional and integer grid indices, and the rounding
//! policy that converts one into the other.

use std::fmt;

/// A position in the project's world coordinate frame.
///
/// `x`/`y` are lateral map coordinates; `z` is in the vertical unit of
/// the object's domain (time or depth).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point3 {
    /// Easting.
    pub x: f64,
    /// Northing.
    pub y: f64,
    /// Vertical coordinate.
    pub z: f64,
}

impl Point3 {
    /// Construct a point from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Integer grid index `(I, J, K)`.
///
/// Components are signed: a position outside the grid maps to a
/// negative or too-large index, which the sampler rejects by range
/// check rather than by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index3 {
    /// Inline index.
    pub i: i64,
    /// Crossline index.
    pub j: i64,
    /// Sample (vertical) index.
    pub k: i64,
}

impl Index3 {
    /// Construct an index from its components.
    pub const fn new(i: i64, j: i64, k: i64) -> Self {
        Self { i, j, k }
    }

    /// The lateral `(I, J)` part of this index.
    pub fn lateral(&self) -> LateralKey {
        LateralKey {
            i: self.i,
            j: self.j,
        }
    }
}

impl fmt::Display for Index3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.i, self.j, self.k)
    }
}

/// Fractional grid index, the direct output of a volume's
/// position-to-index transform.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct IndexDouble3 {
    /// Fractional inline index.
    pub i: f64,
    /// Fractional crossline index.
    pub j: f64,
    /// Fractional sample index.
    pub k: f64,
}

impl IndexDouble3 {
    /// Construct a fractional index from its components.
    pub const fn new(i: f64, j: f64, k: f64) -> Self {
        Self { i, j, k }
    }

    /// Round every component to the nearest integer (ties to even).
    ///
    /// Returns `None` when a component is not finite or does not fit in
    /// an `i64`; such a position has no grid cell at all.
    pub fn to_index3(&self) -> Option<Index3> {
        self.to_index3_with(SampleRounding::Nearest)
    }

    /// Convert to an integer index under an explicit rounding policy.
    pub fn to_index3_with(&self, rounding: SampleRounding) -> Option<Index3> {
        Some(Index3 {
            i: rounding.apply(self.i)?,
            j: rounding.apply(self.j)?,
            k: rounding.apply(self.k)?,
        })
    }
}

/// Lateral grid cell `(I, J)`, used as a lookup key between horizons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LateralKey {
    /// Inline index.
    pub i: i64,
    /// Crossline index.
    pub j: i64,
}

impl LateralKey {
    /// Construct a key from its components.
    pub const fn new(i: i64, j: i64) -> Self {
        Self { i, j }
    }
}

/// Policy for converting a fractional index into an integer one.
///
/// The two policies agree on integral values and on positive values
/// whose fractional part is below one half. They differ everywhere
/// else: `30.67` becomes `31` under [`Nearest`](Self::Nearest) and `30`
/// under [`TowardZero`](Self::TowardZero), and `-0.6` becomes `-1`
/// (out of range) and `0` (in range) respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SampleRounding {
    /// Round to the nearest integer, ties to even.
    #[default]
    Nearest,
    /// Truncate toward zero.
    TowardZero,
}

impl SampleRounding {
    /// Largest magnitude that converts to `i64` without saturating.
    const LIMIT: f64 = 9.0e18;

    /// Apply the policy to a single fractional index.
    ///
    /// Returns `None` for NaN, infinities, and magnitudes beyond the
    /// `i64` range.
    pub fn apply(self, value: f64) -> Option<i64> {
        if !value.is_finite() {
            return None;
        }
        let rounded = match self {
            Self::Nearest => value.round_ties_even(),
            Self::TowardZero => value.trunc(),
        };
        if rounded.abs() >= Self::LIMIT {
            return None;
        }
        Some(rounded as i64)
    }
}
