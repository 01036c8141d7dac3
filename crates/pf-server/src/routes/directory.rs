//! Read-only listings: webhooks, employees, wallets.

use axum::Json;
use axum::extract::State;

use pf_core::entities::{Employee, Wallet, WebhookEvent};

use crate::AppState;
use crate::extract::Umbrella;

pub async fn webhooks(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<WebhookEvent>> {
    Json(state.ledger.list_webhooks(umbrella.as_str()).await)
}

pub async fn employees(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<Employee>> {
    Json(state.ledger.list_employees(umbrella.as_str()).await)
}

pub async fn wallets(State(state): State<AppState>, umbrella: Umbrella) -> Json<Vec<Wallet>> {
    Json(state.ledger.list_wallets(umbrella.as_str()).await)
}
