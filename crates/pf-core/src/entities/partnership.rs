use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Record, require};
use crate::enums::EntityType;
use crate::errors::CoreError;
use crate::ids::PREFIX_PARTNERSHIP;

/// A strategic banking or liquidity partnership bound from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partnership {
    pub id: String,
    pub partner: String,
    pub tier: String,
    pub region: String,
    pub credit_line: f64,
    pub bound_at: DateTime<Utc>,
}

impl Record for Partnership {
    const ENTITY: EntityType = EntityType::Partnership;
    const PREFIX: &'static str = PREFIX_PARTNERSHIP;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /api/strategic/bind`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPartnership {
    pub partner: String,
    #[serde(default = "default_tier")]
    pub tier: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub credit_line: f64,
}

fn default_tier() -> String {
    "STANDARD".to_string()
}

impl NewPartnership {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank partner or a negative
    /// credit line.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("partner", &self.partner)?;
        if !self.credit_line.is_finite() || self.credit_line < 0.0 {
            return Err(CoreError::Validation(
                "'creditLine' must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_partnership(self, id: String, bound_at: DateTime<Utc>) -> Partnership {
        Partnership {
            id,
            partner: self.partner,
            tier: self.tier,
            region: self.region,
            credit_line: self.credit_line,
            bound_at,
        }
    }
}
