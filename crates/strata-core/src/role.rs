//! Semantic roles of extraction inputs.

use std::fmt;

/// The role an input plays in an extraction request.
///
/// Used to report which argument was absent or in the wrong domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputRole {
    /// The seismic volume samples are read from.
    Volume,
    /// The horizon driving a single-horizon extraction.
    Horizon,
    /// The horizon whose points carry the interpolated output.
    PrimaryHorizon,
    /// The companion horizon interpolated towards.
    CompanionHorizon,
    /// The projection of a horizon onto the volume's survey.
    HorizonProjection,
    /// A caller-supplied output property.
    OutputProperty,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Volume => "volume",
            Self::Horizon => "horizon",
            Self::PrimaryHorizon => "primary horizon",
            Self::CompanionHorizon => "companion horizon",
            Self::HorizonProjection => "horizon projection",
            Self::OutputProperty => "output property",
        };
        f.write_str(s)
    }
}
