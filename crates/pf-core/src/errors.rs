//! Cross-cutting error types for PayFlow.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `LedgerError`, `InsightError`) are defined in
//! their respective crates and wrap `CoreError` where they need to.

use thiserror::Error;

use crate::enums::EntityType;

/// Errors that can be raised by any PayFlow crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: EntityType,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (missing fields, bad values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The OS random source could not be read.
    #[error("Random source unavailable: {0}")]
    Entropy(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}
