//! Ledger routes through the full router.

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use common::{TENANT, app, call, get, request, send};

#[tokio::test]
async fn health_needs_no_tenant() {
    let app = app();
    let (status, body) = send(&app, request(Method::GET, "/api/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["time"].is_string());
}

#[rstest]
#[case(Method::GET, "/api/regions")]
#[case(Method::POST, "/api/regions")]
#[case(Method::PATCH, "/api/regions/REG-NA01/toggle")]
#[case(Method::POST, "/api/regions/REG-NA01/rails")]
#[case(Method::DELETE, "/api/regions/REG-NA01/rails/ACH")]
#[case(Method::GET, "/api/approvals")]
#[case(Method::POST, "/api/approvals/request")]
#[case(Method::PATCH, "/api/approvals/APP-0001")]
#[case(Method::GET, "/api/collections")]
#[case(Method::POST, "/api/collections")]
#[case(Method::GET, "/api/transactions")]
#[case(Method::POST, "/api/transactions/update")]
#[case(Method::POST, "/api/trades/execute")]
#[case(Method::GET, "/api/webhooks")]
#[case(Method::GET, "/api/employees")]
#[case(Method::GET, "/api/wallets")]
#[case(Method::GET, "/api/strategic/partnerships")]
#[case(Method::POST, "/api/strategic/bind")]
#[case(Method::POST, "/api/ai/insights")]
#[case(Method::GET, "/api/does-not-exist")]
#[tokio::test]
async fn gated_routes_require_umbrella(#[case] method: Method, #[case] uri: &str) {
    let app = app();
    let (status, body) = send(&app, request(method.clone(), uri, None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "AUTH_REQUIRED" }));

    let (status, _) = send(&app, request(method, uri, Some("   "), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let app = app();
    let (status, body) = get(&app, "/api/nope/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn approval_request_then_list() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/approvals/request",
        &json!({ "type": "BANK_ACCOUNT", "requester": "A", "details": "d" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let request = &body["request"];
    let id = request["id"].as_str().unwrap();
    assert!(id.starts_with("APP-") && id.len() == 8);
    assert_eq!(request["type"], "BANK_ACCOUNT");
    assert_eq!(request["requester"], "A");
    assert_eq!(request["details"], "d");
    assert_eq!(request["status"], "PENDING");
    assert!(
        chrono::DateTime::parse_from_rfc3339(request["timestamp"].as_str().unwrap()).is_ok()
    );

    let (_, listed) = get(&app, "/api/approvals").await;
    assert_eq!(listed[0], *request);
}

#[tokio::test]
async fn unknown_approval_type_is_invalid_body() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/approvals/request",
        &json!({ "type": "WIRE_EVERYTHING", "requester": "A" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_BODY");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn decide_approval_flow() {
    let app = app();
    let uri = "/api/approvals/APP-0001";

    let (status, body) = call(&app, Method::PATCH, uri, &json!({ "status": "APPROVED" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approval"]["status"], "APPROVED");

    let (status, body) = call(&app, Method::PATCH, uri, &json!({ "status": "REJECTED" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "INVALID_TRANSITION");

    let (status, body) = call(
        &app,
        Method::PATCH,
        "/api/approvals/APP-NONE",
        &json!({ "status": "APPROVED" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn toggle_twice_restores_region() {
    let app = app();
    let uri = "/api/regions/REG-NA01/toggle";
    let (_, first) = call(&app, Method::PATCH, uri, &json!({})).await;
    assert_eq!(first["region"]["status"], "SUSPENDED");
    let (_, second) = call(&app, Method::PATCH, uri, &json!({})).await;
    assert_eq!(second["region"]["status"], "ACTIVE");

    let (status, _) = call(&app, Method::PATCH, "/api/regions/REG-NONE/toggle", &json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_region_returns_all_regions() {
    let app = app();
    let (_, before) = get(&app, "/api/regions").await;
    let (status, regions) = call(
        &app,
        Method::POST,
        "/api/regions",
        &json!({ "name": "Brazil", "code": "BR", "currency": "BRL", "rails": ["PIX"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let regions = regions.as_array().unwrap();
    assert_eq!(regions.len(), before.as_array().unwrap().len() + 1);
    assert_eq!(regions.last().unwrap()["code"], "BR");
}

#[tokio::test]
async fn rails_add_and_remove() {
    let app = app();
    let (status, rails) = call(
        &app,
        Method::POST,
        "/api/regions/REG-MX01/rails",
        &json!({ "railName": "CODI" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rails, json!(["SPEI", "CODI"]));

    let delete = |uri: &'static str| request(Method::DELETE, uri, Some(TENANT), None);
    let (status, body) = send(&app, delete("/api/regions/REG-MX01/rails/SPEI")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = send(&app, delete("/api/regions/REG-MX01/rails/SPEI")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, _) = send(&app, delete("/api/regions/REG-NONE/rails/SPEI")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn collections_are_replaced() {
    let app = app();
    let schedule = json!({ "collections": [{
        "id": "COL-ZZZZ",
        "payer": "Acme",
        "amount": 500.0,
        "currency": "USD",
        "dueDate": "2026-11-30",
        "status": "SCHEDULED"
    }]});
    let (status, body) = call(&app, Method::POST, "/api/collections", &schedule).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, listed) = get(&app, "/api/collections").await;
    assert_eq!(listed, schedule["collections"]);
}

#[tokio::test]
async fn transaction_update_upserts() {
    let app = app();
    let txn = json!({
        "id": "TXN-0001",
        "reference": "INV-2291",
        "amount": 12500.0,
        "currency": "USD",
        "counterparty": "Northwind Traders",
        "status": "COMPLETED",
        "timestamp": "2026-10-01T12:00:00Z"
    });
    let (status, _) = call(&app, Method::POST, "/api/transactions/update", &txn).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = get(&app, "/api/transactions").await;
    let updated = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == "TXN-0001")
        .unwrap();
    assert_eq!(updated["status"], "COMPLETED");
}

#[tokio::test]
async fn trade_execution_records_event() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/trades/execute",
        &json!({ "pair": "EUR/USD", "side": "SELL", "notional": 100000, "quotedRate": 1.085, "executionRate": 1.0845 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!((body["delta"].as_f64().unwrap() - 50.0).abs() < 1e-9);
    assert_eq!(body["event"]["event"], "trade.executed");

    let (_, webhooks) = get(&app, "/api/webhooks").await;
    assert_eq!(webhooks[0], body["event"]);
}

#[tokio::test]
async fn partnership_bind() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/strategic/bind",
        &json!({ "partner": "Helios Bank", "region": "EU", "creditLine": 2000000 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["partnership"]["tier"], "STANDARD");
    assert!(body["partnership"]["id"].as_str().unwrap().starts_with("PTN-"));

    let (status, listed) = get(&app, "/api/strategic/partnerships").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([body["partnership"].clone()]));
}

#[tokio::test]
async fn read_only_listings() {
    let app = app();
    for uri in ["/api/webhooks", "/api/employees", "/api/wallets"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(!body.as_array().unwrap().is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn tenants_are_isolated() {
    let app = app();
    call(
        &app,
        Method::POST,
        "/api/approvals/request",
        &json!({ "type": "PAYOUT", "requester": "hq" }),
    )
    .await;

    let (_, hq) = get(&app, "/api/approvals").await;
    let (_, other) = send(
        &app,
        request(Method::GET, "/api/approvals", Some("LATAM-01"), None),
    )
    .await;
    assert_eq!(
        hq.as_array().unwrap().len(),
        other.as_array().unwrap().len() + 1
    );
}

#[tokio::test]
async fn malformed_json_is_invalid_body() {
    let app = app();
    let req = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/strategic/bind")
        .header("x-umbrella-id", TENANT)
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_BODY");
}
