//! `POST /api/ai/insights`: forwards a prompt to the hosted model.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use pf_core::responses::{InsightPrompt, InsightReply};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::Umbrella;

/// Non-blank prompt from a raw request body. An empty, non-JSON or
/// prompt-less body yields `None`.
fn prompt_from_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<InsightPrompt>(body)
        .ok()
        .and_then(|b| b.prompt)
        .filter(|p| !p.trim().is_empty())
}

/// The body is decoded only after the key check: an unconfigured server
/// answers `MISSING_API_KEY` whatever was sent.
pub async fn insights(
    State(state): State<AppState>,
    umbrella: Umbrella,
    body: Bytes,
) -> Result<Json<InsightReply>, ApiError> {
    let Some(client) = state.ai.as_deref() else {
        return Err(ApiError::MissingApiKey);
    };
    let prompt = prompt_from_body(&body).ok_or(ApiError::PromptRequired)?;

    match client.generate(&prompt).await {
        Ok(text) => Ok(Json(InsightReply::text(text))),
        Err(e) => {
            tracing::warn!(umbrella = umbrella.as_str(), model = client.model(), error = %e, "model call failed");
            Err(ApiError::Upstream(e.to_string()))
        }
    }
}
