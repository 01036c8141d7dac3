//! Tenant gate for every `/api/*` route except health.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::extract::Umbrella;

/// Reject requests without a usable `x-umbrella-id` with
/// `401 { "error": "AUTH_REQUIRED" }`; otherwise stash the [`Umbrella`] in
/// the request extensions and continue.
pub async fn require_umbrella(mut req: Request, next: Next) -> Response {
    let Some(umbrella) = Umbrella::from_headers(req.headers()) else {
        tracing::debug!(path = %req.uri().path(), "rejecting request without umbrella id");
        return ApiError::AuthRequired.into_response();
    };
    req.extensions_mut().insert(umbrella);
    next.run(req).await
}
