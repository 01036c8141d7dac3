use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Record, require, require_currency};
use crate::enums::{EntityType, RegionStatus};
use crate::errors::CoreError;
use crate::ids::PREFIX_REGION;

/// A treasury operating region and the payment rails enabled in it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: String,
    pub code: String,
    pub currency: String,
    pub status: RegionStatus,
    pub rails: Vec<String>,
    pub liquidity: f64,
}

impl Record for Region {
    const ENTITY: EntityType = EntityType::Region;
    const PREFIX: &'static str = PREFIX_REGION;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /api/regions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRegion {
    pub name: String,
    pub code: String,
    pub currency: String,
    #[serde(default)]
    pub rails: Vec<String>,
    #[serde(default)]
    pub liquidity: f64,
    #[serde(default)]
    pub status: Option<RegionStatus>,
}

impl NewRegion {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for blank names or codes, a
    /// malformed currency, or negative liquidity.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("code", &self.code)?;
        require_currency(&self.currency)?;
        if !self.liquidity.is_finite() || self.liquidity < 0.0 {
            return Err(CoreError::Validation(
                "'liquidity' must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    /// Build the stored record under a freshly generated id.
    #[must_use]
    pub fn into_region(self, id: String) -> Region {
        let mut rails = Vec::with_capacity(self.rails.len());
        for rail in self.rails {
            if !rails.contains(&rail) {
                rails.push(rail);
            }
        }
        Region {
            id,
            name: self.name,
            code: self.code,
            currency: self.currency,
            status: self.status.unwrap_or(RegionStatus::Active),
            rails,
            liquidity: self.liquidity,
        }
    }
}
