//! Domain and template tags.

use std::fmt;

/// Vertical domain of a volume or interpretation.
///
/// Objects in different domains are incompatible: a time-domain horizon
/// cannot be sampled from a depth-domain cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Two-way travel time.
    Time,
    /// True vertical depth.
    Depth,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Depth => write!(f, "depth"),
        }
    }
}

/// Property template: the kind of quantity a volume or property carries
/// (e.g. "Seismic amplitude").
///
/// Templates compare by name. A property created from a volume inherits
/// the volume's template, and fault properties are keyed by
/// `(name, template)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template(String);

impl Template {
    /// Create a template with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The template name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
