use axum::Json;
use axum::extract::State;

use pf_core::responses::TradeExecutionResponse;
use pf_core::trade::TradeRequest;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, Umbrella};

/// `POST /api/trades/execute`.
pub async fn execute(
    State(state): State<AppState>,
    umbrella: Umbrella,
    ApiJson(trade): ApiJson<TradeRequest>,
) -> Result<Json<TradeExecutionResponse>, ApiError> {
    let execution = state.ledger.execute_trade(umbrella.as_str(), trade).await?;
    Ok(Json(TradeExecutionResponse {
        success: true,
        delta: execution.delta,
        event: execution.event,
    }))
}
