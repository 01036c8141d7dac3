//! `/api/collections` handlers.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use pf_core::entities::Collection;
use pf_core::responses::SuccessResponse;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, Umbrella};

#[derive(Debug, Deserialize)]
pub struct CollectionsBody {
    pub collections: Vec<Collection>,
}

pub async fn list(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<Collection>> {
    Json(state.ledger.list_collections(umbrella.as_str()).await)
}

/// Replace the whole collection schedule.
pub async fn replace(
    State(state): State<AppState>,
    umbrella: Umbrella,
    ApiJson(body): ApiJson<CollectionsBody>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .ledger
        .replace_collections(umbrella.as_str(), body.collections)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
