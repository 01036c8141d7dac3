//! Ledger error types for pf-ledger.

use pf_core::enums::EntityType;
use pf_core::errors::CoreError;
use thiserror::Error;

/// Errors from ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The targeted record does not exist in this tenant's ledger.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// A status change the record's state machine does not allow.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: EntityType,
        id: String,
        from: String,
        to: String,
    },

    /// The request body failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Every id draw collided with an existing record.
    #[error("Could not allocate a free {0} id")]
    IdSpaceExhausted(EntityType),

    /// Catch-all for core failures (e.g. the random source).
    #[error(transparent)]
    Core(CoreError),
}

impl LedgerError {
    pub fn not_found(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

impl From<CoreError> for LedgerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            CoreError::InvalidTransition {
                entity_type,
                id,
                from,
                to,
            } => Self::InvalidTransition {
                entity_type,
                id,
                from,
                to,
            },
            CoreError::Validation(msg) => Self::Validation(msg),
            other => Self::Core(other),
        }
    }
}
