//! Store and transaction error types.

use std::error::Error;
use std::fmt;

use strata_core::{CollectionId, FaultId, HorizonId, SurveyId, Template};

use crate::transaction::ObjectRef;

/// Errors from building a project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A parent collection id does not exist.
    UnknownCollection {
        /// The missing collection.
        collection: CollectionId,
    },
    /// A horizon id does not exist.
    UnknownHorizon {
        /// The missing horizon.
        horizon: HorizonId,
    },
    /// A horizon already has a projection for this survey.
    DuplicateProjection {
        /// The horizon.
        horizon: HorizonId,
        /// The survey projected twice.
        survey: SurveyId,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCollection { collection } => write!(f, "unknown collection {collection}"),
            Self::UnknownHorizon { horizon } => write!(f, "unknown horizon {horizon}"),
            Self::DuplicateProjection { horizon, survey } => {
                write!(f, "{horizon} already has a projection on {survey}")
            }
        }
    }
}

impl Error for StoreError {}

/// Errors from transaction operations.
///
/// None of these leave partial state behind: the failing call stages
/// nothing, and the transaction stays usable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxError {
    /// The object does not exist in the project.
    UnknownObject {
        /// The missing object.
        object: ObjectRef,
    },
    /// A mutation was attempted on an object that was not locked first.
    NotLocked {
        /// The unlocked object.
        object: ObjectRef,
    },
    /// The horizon has no projection on the requested survey.
    MissingProjection {
        /// The horizon.
        horizon: HorizonId,
        /// The requested survey.
        survey: SurveyId,
    },
    /// The fault already owns a property with this `(name, template)` key.
    DuplicateProperty {
        /// The owning fault.
        fault: FaultId,
        /// Property name.
        name: String,
        /// Property template.
        template: Template,
    },
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject { object } => write!(f, "unknown object {object}"),
            Self::NotLocked { object } => write!(f, "{object} must be locked before mutation"),
            Self::MissingProjection { horizon, survey } => {
                write!(f, "{horizon} has no projection on {survey}")
            }
            Self::DuplicateProperty {
                fault,
                name,
                template,
            } => write!(
                f,
                "{fault} already has a property named '{name}' with template '{template}'"
            ),
        }
    }
}

impl Error for TxError {}
