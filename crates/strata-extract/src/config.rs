//! Extraction requests, their validation, and configuration errors.
//!
//! Requests are plain structs bound with struct literals or the `new`
//! constructors below. [`OffsetSet`] validates on construction, so a
//! [`HorizonInterpolation`] can never hold an invalid offset list.

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;
use strata_core::{HorizonId, PropertyId, SampleRounding, VolumeId};

/// Label of the fault property the propagator finds or creates.
pub const DEFAULT_FAULT_PROPERTY_NAME: &str = "Ocean Fault Property";

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a request.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The interpolation offset list is empty.
    EmptyOffsets,
    /// An interpolation offset is NaN, infinite, or outside `[0, 1]`.
    InvalidOffset {
        /// The rejected value.
        value: f64,
    },
    /// The fault property name is empty or whitespace.
    EmptyPropertyName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOffsets => write!(f, "at least one interpolation offset is required"),
            Self::InvalidOffset { value } => {
                write!(f, "interpolation offset {value} is not within [0, 1]")
            }
            Self::EmptyPropertyName => write!(f, "fault property name must not be empty"),
        }
    }
}

impl Error for ConfigError {}

// ── OffsetSet ──────────────────────────────────────────────────────

/// Fractional offsets between two horizons, each in `[0, 1]`.
///
/// Offset `t` targets `k1 - (k1 - k2) * t`: `0` is the primary horizon
/// itself, `1` the companion.
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetSet {
    offsets: SmallVec<[f64; 4]>,
}

impl OffsetSet {
    /// Validate and collect offsets, keeping their order.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyOffsets`] or [`ConfigError::InvalidOffset`].
    pub fn new(offsets: impl IntoIterator<Item = f64>) -> Result<Self, ConfigError> {
        let offsets: SmallVec<[f64; 4]> = offsets.into_iter().collect();
        if offsets.is_empty() {
            return Err(ConfigError::EmptyOffsets);
        }
        if let Some(&value) = offsets
            .iter()
            .find(|t| !t.is_finite() || !(0.0..=1.0).contains(*t))
        {
            return Err(ConfigError::InvalidOffset { value });
        }
        Ok(Self { offsets })
    }

    /// One-third and two-thirds of the gap.
    pub fn thirds() -> Self {
        Self {
            offsets: SmallVec::from_slice(&[1.0 / 3.0, 2.0 / 3.0]),
        }
    }

    /// The offsets, in configured order.
    pub fn as_slice(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of offsets (never zero).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`; an offset set holds at least one offset.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Property name used for the output at offset `t`.
    pub fn label(t: f64) -> String {
        format!("Interpolated {:.0}%", t * 100.0)
    }
}

impl Default for OffsetSet {
    fn default() -> Self {
        Self::thirds()
    }
}

// ── Requests ───────────────────────────────────────────────────────

/// Sample a volume onto one horizon.
#[derive(Clone, Debug)]
pub struct HorizonExtraction {
    /// Volume to sample.
    pub volume: VolumeId,
    /// Horizon to sample along.
    pub horizon: HorizonId,
    /// Existing property to overwrite. `None` creates a new one on the
    /// horizon's projection for the volume's survey.
    pub output: Option<PropertyId>,
}

/// Sample a volume at fractional depths between two horizons.
#[derive(Clone, Debug)]
pub struct HorizonInterpolation {
    /// Volume to sample.
    pub volume: VolumeId,
    /// Horizon whose projection carries the outputs (horizon 1).
    pub primary: HorizonId,
    /// Horizon interpolated towards (horizon 2).
    pub companion: HorizonId,
    /// One output property per offset.
    pub offsets: OffsetSet,
    /// How fractional target depths become sample indices.
    pub rounding: SampleRounding,
}

impl HorizonInterpolation {
    /// Request with the default offsets (thirds) and nearest rounding.
    pub fn new(volume: VolumeId, primary: HorizonId, companion: HorizonId) -> Self {
        Self {
            volume,
            primary,
            companion,
            offsets: OffsetSet::default(),
            rounding: SampleRounding::default(),
        }
    }
}

/// Sample a volume onto every fault in the project.
#[derive(Clone, Debug)]
pub struct FaultPropagation {
    /// Volume to sample.
    pub volume: VolumeId,
    /// Name of the per-fault property. The template is always the
    /// volume's.
    pub property_name: String,
}

impl FaultPropagation {
    /// Request with [`DEFAULT_FAULT_PROPERTY_NAME`].
    pub fn new(volume: VolumeId) -> Self {
        Self {
            volume,
            property_name: DEFAULT_FAULT_PROPERTY_NAME.to_string(),
        }
    }

    /// Check the request before any project access.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyPropertyName`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_property_name(&self.property_name)
    }
}

/// Arguments of [`AmplitudeWorkstep`](crate::AmplitudeWorkstep).
///
/// Inputs are optional, as a host argument package would leave them;
/// an absent input is reported as missing by the stage that needs it.
#[derive(Clone, Debug)]
pub struct WorkstepArguments {
    /// Volume sampled by both stages.
    pub volume: Option<VolumeId>,
    /// Horizon for the extraction stage.
    pub horizon: Option<HorizonId>,
    /// Existing property for the extraction stage to overwrite.
    pub output: Option<PropertyId>,
    /// Name of the per-fault property.
    pub fault_property_name: String,
}

impl Default for WorkstepArguments {
    fn default() -> Self {
        Self {
            volume: None,
            horizon: None,
            output: None,
            fault_property_name: DEFAULT_FAULT_PROPERTY_NAME.to_string(),
        }
    }
}

impl WorkstepArguments {
    /// Check the arguments before any project access.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyPropertyName`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_property_name(&self.fault_property_name)
    }
}

fn validate_property_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::EmptyPropertyName);
    }
    Ok(())
}
