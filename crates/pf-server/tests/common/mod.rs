//! Shared helpers for router tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use pf_ledger::LedgerStore;
use pf_server::{AppState, build_router};
use serde_json::Value;
use tower::ServiceExt;

pub const TENANT: &str = "GLB-HQ";

/// Router over a seeded ledger with no model configured.
pub fn app() -> Router {
    build_router(AppState::new(Arc::new(LedgerStore::seeded()), None), None)
}

pub fn request(method: Method, uri: &str, umbrella: Option<&str>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(umbrella) = umbrella {
        builder = builder.header("x-umbrella-id", umbrella);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request and decode the body as JSON (`Null` when empty or not JSON).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, request(Method::GET, uri, Some(TENANT), None)).await
}

pub async fn call(app: &Router, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, request(method, uri, Some(TENANT), Some(body))).await
}
