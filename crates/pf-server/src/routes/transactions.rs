//! `/api/transactions` handlers.

use axum::Json;
use axum::extract::State;

use pf_core::entities::Transaction;
use pf_core::responses::SuccessResponse;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, Umbrella};

pub async fn list(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<Transaction>> {
    Json(state.ledger.list_transactions(umbrella.as_str()).await)
}

/// Upsert one transaction by id.
pub async fn update(
    State(state): State<AppState>,
    umbrella: Umbrella,
    ApiJson(body): ApiJson<Transaction>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .ledger
        .upsert_transaction(umbrella.as_str(), body)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
