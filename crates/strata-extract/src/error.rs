//! Extraction error type.

use std::error::Error;
use std::fmt;

use strata_core::{Domain, InputRole};
use strata_store::TxError;

use crate::config::ConfigError;

/// Why an extraction call was refused or failed.
///
/// `MissingInput` and `DomainMismatch` are raised before any transaction
/// opens, so they never leave staged work behind. A `Transaction` error
/// drops the open transaction, which abandons it.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtractError {
    /// A required input is absent from the project.
    MissingInput {
        /// Which input.
        role: InputRole,
    },
    /// An input's domain differs from the volume's.
    DomainMismatch {
        /// Which input.
        role: InputRole,
        /// The volume's domain.
        volume: Domain,
        /// The input's domain.
        other: Domain,
    },
    /// A store operation failed inside the transaction.
    Transaction(TxError),
    /// The request failed validation.
    Config(ConfigError),
}

impl ExtractError {
    /// Returns `true` if the call was refused before any transaction
    /// opened: a missing input, a domain mismatch or an invalid request.
    pub fn is_refusal(&self) -> bool {
        !matches!(self, Self::Transaction(_))
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { role } => write!(f, "missing input: {role}"),
            Self::DomainMismatch {
                role,
                volume,
                other,
            } => write!(
                f,
                "{role} is in the {other} domain but the volume is in the {volume} domain"
            ),
            Self::Transaction(e) => write!(f, "transaction failed: {e}"),
            Self::Config(e) => write!(f, "invalid request: {e}"),
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transaction(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::MissingInput { .. } | Self::DomainMismatch { .. } => None,
        }
    }
}

impl From<TxError> for ExtractError {
    fn from(e: TxError) -> Self {
        Self::Transaction(e)
    }
}

impl From<ConfigError> for ExtractError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Log a refused request and hand the error back.
pub(crate) fn refused(operation: &'static str, err: ExtractError) -> ExtractError {
    tracing::warn!(operation, error = %err, "extraction refused");
    err
}

/// `MissingInput` for `role`, logged.
pub(crate) fn missing(operation: &'static str, role: InputRole) -> ExtractError {
    refused(operation, ExtractError::MissingInput { role })
}

/// Refuse when `other` is not in the volume's domain.
pub(crate) fn ensure_domain(
    operation: &'static str,
    role: InputRole,
    volume: Domain,
    other: Domain,
) -> Result<(), ExtractError> {
    if volume != other {
        return Err(refused(
            operation,
            ExtractError::DomainMismatch {
                role,
                volume,
                other,
            },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::FaultId;
    use strata_store::ObjectRef;

    #[test]
    fn display_names_the_role() {
        let e = ExtractError::DomainMismatch {
            role: InputRole::Horizon,
            volume: Domain::Time,
            other: Domain::Depth,
        };
        assert_eq!(
            e.to_string(),
            "horizon is in the depth domain but the volume is in the time domain"
        );
        assert_eq!(
            ExtractError::MissingInput {
                role: InputRole::Volume
            }
            .to_string(),
            "missing input: volume"
        );
    }

    #[test]
    fn store_errors_are_sources() {
        let e: ExtractError = TxError::NotLocked {
            object: ObjectRef::Fault(FaultId(3)),
        }
        .into();
        assert!(e.source().is_some());
        assert!(!e.is_refusal());
        assert!(ensure_domain("test", InputRole::Horizon, Domain::Time, Domain::Time).is_ok());
    }

    #[test]
    fn refusals_are_raised_before_the_store() {
        assert!(ExtractError::MissingInput {
            role: InputRole::Horizon
        }
        .is_refusal());
        assert!(ExtractError::DomainMismatch {
            role: InputRole::Horizon,
            volume: Domain::Time,
            other: Domain::Depth,
        }
        .is_refusal());
        assert!(ExtractError::Config(ConfigError::EmptyOffsets).is_refusal());
    }
}
