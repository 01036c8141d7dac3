use axum::Json;
use chrono::Utc;

use pf_core::responses::HealthResponse;

/// `GET /api/health`. Needs no tenant header.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: Utc::now(),
    })
}
