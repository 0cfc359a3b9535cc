//! Strongly-typed identifiers for project objects.
//!
//! Every object the project store hands out is addressed by one of these
//! newtypes. Ids are allocated by the store from a single monotonic
//! counter, so two objects never share a raw value even across kinds.

use std::fmt;

/// Identifies a seismic volume registered in a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VolumeId(pub u64);

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "volume#{}", self.0)
    }
}

impl From<u64> for VolumeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a survey: the lateral (I, J) grid shared by the volumes of
/// one seismic collection.
///
/// Horizons are projected per survey, so a horizon resolves against a
/// volume by looking up the projection for the volume's survey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurveyId(pub u32);

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "survey#{}", self.0)
    }
}

impl From<u32> for SurveyId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a horizon interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HorizonId(pub u64);

impl fmt::Display for HorizonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "horizon#{}", self.0)
    }
}

impl From<u64> for HorizonId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a fault interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaultId(pub u64);

impl fmt::Display for FaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fault#{}", self.0)
    }
}

impl From<u64> for FaultId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies an interpretation collection (a node of the fault tree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(pub u64);

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection#{}", self.0)
    }
}

impl From<u64> for CollectionId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a property surface owned by a horizon projection or a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property#{}", self.0)
    }
}

impl From<u64> for PropertyId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a 2D seismic line, one of the contexts a fault point can
/// be resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line#{}", self.0)
    }
}

impl From<u64> for LineId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counts committed transactions on a project.
///
/// Incremented exactly once per successful commit. An abandoned
/// transaction leaves it untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ProjectGeneration(pub u64);

impl fmt::Display for ProjectGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectGeneration {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
