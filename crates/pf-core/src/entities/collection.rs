use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Record, require, require_currency};
use crate::enums::{CollectionStatus, EntityType};
use crate::errors::CoreError;
use crate::ids::PREFIX_COLLECTION;

/// An expected inbound payment. `POST /api/collections` replaces the whole
/// list; entries sent without an id get one assigned by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub id: String,
    pub payer: String,
    pub amount: f64,
    pub currency: String,
    pub due_date: NaiveDate,
    pub status: CollectionStatus,
}

impl Record for Collection {
    const ENTITY: EntityType = EntityType::Collection;
    const PREFIX: &'static str = PREFIX_COLLECTION;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank payer, a malformed
    /// currency, or a negative amount.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("payer", &self.payer)?;
        require_currency(&self.currency)?;
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(CoreError::Validation(
                "'amount' must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}
