//! Ledger record structs for all PayFlow collections.
//!
//! Field names serialize as `camelCase` to match the dashboard's JSON. Each
//! record type implements [`Record`] so the ledger can store it in a typed
//! collection. `New*` structs are the validated request bodies that create
//! records.

mod approval;
mod collection;
mod employee;
mod partnership;
mod region;
mod transaction;
mod wallet;
mod webhook;

pub use approval::{Approval, NewApproval};
pub use collection::Collection;
pub use employee::Employee;
pub use partnership::{NewPartnership, Partnership};
pub use region::{NewRegion, Region};
pub use transaction::Transaction;
pub use wallet::Wallet;
pub use webhook::WebhookEvent;

use crate::enums::EntityType;
use crate::errors::CoreError;

/// A record stored in a ledger collection, keyed by a `PREFIX-XXXX` id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity kind, for errors and logs.
    const ENTITY: EntityType;
    /// Prefix used when the ledger synthesizes an id.
    const PREFIX: &'static str;

    fn id(&self) -> &str;
}

/// Reject blank required text fields.
pub(crate) fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}

/// ISO 4217-style currency code: three upper-case ASCII letters.
pub(crate) fn require_currency(value: &str) -> Result<(), CoreError> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'currency' must be a 3-letter upper-case code, got '{value}'"
        )))
    }
}
