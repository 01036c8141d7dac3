//! Route handlers, one module per resource.

pub mod ai;
pub mod approvals;
pub mod collections;
pub mod directory;
pub mod health;
pub mod regions;
pub mod strategic;
pub mod trades;
pub mod transactions;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unknown `/api/*` paths. Never falls through to the SPA.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no API route for {}", uri.path()))
}
