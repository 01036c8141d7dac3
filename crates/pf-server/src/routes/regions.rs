//! `/api/regions` handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use pf_core::entities::{NewRegion, Region};
use pf_core::responses::{RegionToggleResponse, SuccessResponse};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, Umbrella};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailBody {
    pub rail_name: String,
}

pub async fn list(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<Region>> {
    Json(state.ledger.list_regions(umbrella.as_str()).await)
}

pub async fn create(
    State(state): State<AppState>,
    umbrella: Umbrella,
    ApiJson(body): ApiJson<NewRegion>,
) -> Result<Json<Vec<Region>>, ApiError> {
    let regions = state.ledger.create_region(umbrella.as_str(), body).await?;
    Ok(Json(regions))
}

pub async fn toggle(
    State(state): State<AppState>,
    umbrella: Umbrella,
    Path(id): Path<String>,
) -> Result<Json<RegionToggleResponse>, ApiError> {
    let region = state.ledger.toggle_region(umbrella.as_str(), &id).await?;
    Ok(Json(RegionToggleResponse {
        success: true,
        region,
    }))
}

pub async fn add_rail(
    State(state): State<AppState>,
    umbrella: Umbrella,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<RailBody>,
) -> Result<Json<Vec<String>>, ApiError> {
    let rails = state
        .ledger
        .add_rail(umbrella.as_str(), &id, &body.rail_name)
        .await?;
    Ok(Json(rails))
}

pub async fn remove_rail(
    State(state): State<AppState>,
    umbrella: Umbrella,
    Path((id, rail)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .ledger
        .remove_rail(umbrella.as_str(), &id, &rail)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
