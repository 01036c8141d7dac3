use axum::Json;
use axum::extract::State;

use pf_core::entities::{NewPartnership, Partnership};
use pf_core::responses::PartnershipBindResponse;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, Umbrella};

/// `GET /api/strategic/partnerships`, in bind order.
pub async fn list(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<Partnership>> {
    Json(state.ledger.list_partnerships(umbrella.as_str()).await)
}

/// `POST /api/strategic/bind`.
pub async fn bind(
    State(state): State<AppState>,
    umbrella: Umbrella,
    ApiJson(body): ApiJson<NewPartnership>,
) -> Result<Json<PartnershipBindResponse>, ApiError> {
    let partnership = state.ledger.bind_partnership(umbrella.as_str(), body).await?;
    Ok(Json(PartnershipBindResponse {
        success: true,
        partnership,
    }))
}
