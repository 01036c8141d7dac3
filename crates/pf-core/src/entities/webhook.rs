use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::{DeliveryStatus, EntityType};
use crate::ids::PREFIX_WEBHOOK;

/// An outbound webhook delivery, as shown in the gateway event log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    pub id: String,
    /// Event name, e.g. `"trade.executed"`.
    pub event: String,
    pub endpoint: String,
    pub status: DeliveryStatus,
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl Record for WebhookEvent {
    const ENTITY: EntityType = EntityType::WebhookEvent;
    const PREFIX: &'static str = PREFIX_WEBHOOK;

    fn id(&self) -> &str {
        &self.id
    }
}
