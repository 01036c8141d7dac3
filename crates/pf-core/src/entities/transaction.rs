use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Record, require, require_currency};
use crate::enums::{EntityType, TransactionStatus};
use crate::errors::CoreError;
use crate::ids::PREFIX_TRANSACTION;

/// A payment or remittance moving through the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub reference: String,
    pub amount: f64,
    pub currency: String,
    pub counterparty: String,
    /// Corridor such as `"US-MX"`, when the transaction is cross-border.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corridor: Option<String>,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
}

impl Record for Transaction {
    const ENTITY: EntityType = EntityType::Transaction;
    const PREFIX: &'static str = PREFIX_TRANSACTION;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Transaction {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank id or reference, a
    /// malformed currency, or a non-finite amount.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("id", &self.id)?;
        require("reference", &self.reference)?;
        require_currency(&self.currency)?;
        if !self.amount.is_finite() {
            return Err(CoreError::Validation("'amount' must be finite".into()));
        }
        Ok(())
    }
}
