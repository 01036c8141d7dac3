//! `/api/approvals` handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use pf_core::entities::{Approval, NewApproval};
use pf_core::enums::ApprovalStatus;
use pf_core::responses::{ApprovalDecisionResponse, ApprovalRequestResponse};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, Umbrella};

#[derive(Debug, Deserialize)]
pub struct DecisionBody {
    pub status: ApprovalStatus,
}

pub async fn list(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<Approval>> {
    Json(state.ledger.list_approvals(umbrella.as_str()).await)
}

pub async fn request(
    State(state): State<AppState>,
    umbrella: Umbrella,
    ApiJson(body): ApiJson<NewApproval>,
) -> Result<Json<ApprovalRequestResponse>, ApiError> {
    let request = state.ledger.request_approval(umbrella.as_str(), body).await?;
    Ok(Json(ApprovalRequestResponse {
        success: true,
        request,
    }))
}

pub async fn decide(
    State(state): State<AppState>,
    umbrella: Umbrella,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<DecisionBody>,
) -> Result<Json<ApprovalDecisionResponse>, ApiError> {
    let approval = state
        .ledger
        .decide_approval(umbrella.as_str(), &id, body.status)
        .await?;
    Ok(Json(ApprovalDecisionResponse {
        success: true,
        approval,
    }))
}
