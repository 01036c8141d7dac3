//! # pf-server
//!
//! The PayFlow REST API: a tenant-partitioned mock ledger plus a proxy to
//! the hosted model for `/api/ai/insights`, and optionally the built
//! dashboard as a single-page app.
//!
//! ```text
//! /api/health              open
//! /api/*                   x-umbrella-id required (401 AUTH_REQUIRED)
//! /api/<unknown>           404 NOT_FOUND (JSON, after the gate)
//! /*                       static_dir, index.html fallback (if present)
//! ```

pub mod auth;
pub mod error;
pub mod extract;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get, patch, post};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use pf_config::PayflowConfig;
use pf_insight::{GeminiClient, InsightError};
use pf_ledger::LedgerStore;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<LedgerStore>,
    /// `None` when no model API key is configured.
    pub ai: Option<Arc<GeminiClient>>,
}

impl AppState {
    #[must_use]
    pub const fn new(ledger: Arc<LedgerStore>, ai: Option<Arc<GeminiClient>>) -> Self {
        Self { ledger, ai }
    }

    /// Build state from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the model client cannot be built.
    pub fn from_config(config: &PayflowConfig) -> Result<Self, InsightError> {
        let ai = if config.ai.is_configured() {
            Some(Arc::new(GeminiClient::new(&config.ai)?))
        } else {
            tracing::warn!("no model API key configured; /api/ai/insights will answer MISSING_API_KEY");
            None
        };
        Ok(Self::new(
            Arc::new(LedgerStore::new(config.ledger.seed).with_max_tenants(config.ledger.max_tenants)),
            ai,
        ))
    }
}

/// Routes under `/api`.
fn api_router() -> Router<AppState> {
    let gated = Router::new()
        .route("/regions", get(routes::regions::list).post(routes::regions::create))
        .route("/regions/{id}/toggle", patch(routes::regions::toggle))
        .route("/regions/{id}/rails", post(routes::regions::add_rail))
        .route(
            "/regions/{id}/rails/{rail}",
            delete(routes::regions::remove_rail),
        )
        .route("/approvals", get(routes::approvals::list))
        .route("/approvals/request", post(routes::approvals::request))
        .route("/approvals/{id}", patch(routes::approvals::decide))
        .route(
            "/collections",
            get(routes::collections::list).post(routes::collections::replace),
        )
        .route("/transactions", get(routes::transactions::list))
        .route("/transactions/update", post(routes::transactions::update))
        .route("/trades/execute", post(routes::trades::execute))
        .route("/webhooks", get(routes::directory::webhooks))
        .route("/employees", get(routes::directory::employees))
        .route("/wallets", get(routes::directory::wallets))
        .route("/strategic/partnerships", get(routes::strategic::list))
        .route("/strategic/bind", post(routes::strategic::bind))
        .route("/ai/insights", post(routes::ai::insights))
        .fallback(routes::api_not_found)
        .layer(from_fn(auth::require_umbrella));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(gated)
}

/// Build the full application router.
///
/// When `static_dir` is given and exists, non-API paths are served from it
/// with `index.html` as the fallback.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new().nest("/api", api_router());

    if let Some(dir) = static_dir.filter(|d| d.is_dir()) {
        tracing::info!(dir = %dir.display(), "serving static dashboard");
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        app = app.fallback_service(spa);
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}
