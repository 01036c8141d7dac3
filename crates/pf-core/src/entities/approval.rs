use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Record, require};
use crate::enums::{ApprovalStatus, ApprovalType, EntityType};
use crate::errors::CoreError;
use crate::ids::PREFIX_APPROVAL;

/// A maker-checker approval request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ApprovalType,
    pub requester: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
    pub status: ApprovalStatus,
}

impl Record for Approval {
    const ENTITY: EntityType = EntityType::Approval;
    const PREFIX: &'static str = PREFIX_APPROVAL;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /api/approvals/request`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewApproval {
    #[serde(rename = "type")]
    pub kind: ApprovalType,
    pub requester: String,
    #[serde(default)]
    pub details: String,
}

impl NewApproval {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the requester is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("requester", &self.requester)
    }

    /// New approvals always start out pending.
    #[must_use]
    pub fn into_approval(self, id: String, timestamp: DateTime<Utc>) -> Approval {
        Approval {
            id,
            kind: self.kind,
            requester: self.requester,
            details: self.details,
            timestamp,
            status: ApprovalStatus::Pending,
        }
    }
}
