//! JSON response envelopes returned by the PayFlow API.
//!
//! These structs define the shape of the bodies the dashboard reads after a
//! call. Plain list endpoints return bare arrays and have no envelope here.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Approval, Partnership, Region, WebhookEvent};

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub ok: bool,
    pub time: DateTime<Utc>,
}

/// `{ "success": true }` for mutations that return nothing else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Response from `PATCH /api/regions/{id}/toggle`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RegionToggleResponse {
    pub success: bool,
    pub region: Region,
}

/// Response from `POST /api/approvals/request`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApprovalRequestResponse {
    pub success: bool,
    pub request: Approval,
}

/// Response from `PATCH /api/approvals/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApprovalDecisionResponse {
    pub success: bool,
    pub approval: Approval,
}

/// Response from `POST /api/trades/execute`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TradeExecutionResponse {
    pub success: bool,
    pub delta: f64,
    pub event: WebhookEvent,
}

/// Response from `POST /api/strategic/bind`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PartnershipBindResponse {
    pub success: bool,
    pub partnership: Partnership,
}

/// Body of `POST /api/ai/insights` and of its reply.
///
/// The reply carries `success` + `text` when the model answered and
/// `error` + `message` when it did not. All fields are optional on the wire
/// so one type reads both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InsightReply {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Body of `POST /api/ai/insights`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightPrompt {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Error body: a short machine-readable code and an optional message.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
