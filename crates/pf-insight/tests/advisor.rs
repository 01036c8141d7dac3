//! Advisor operations over an in-process transport.

use std::sync::Mutex;

use chrono::Utc;
use pf_core::entities::{Employee, Transaction};
use pf_core::enums::{EmployeeStatus, TransactionStatus};
use pf_core::insights::{AnomalyAlert, InsightShape, LiquiditySource, PayrollAudit};
use pf_core::provenance::Insight;
use pf_core::responses::InsightReply;
use pf_insight::{InsightError, InsightGateway, InsightTransport, RetryPolicy};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Answers every prompt with a fixed reply and keeps the last prompt.
struct CannedTransport {
    reply: Option<String>,
    last_prompt: Mutex<Option<String>>,
}

impl CannedTransport {
    fn answering(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            last_prompt: Mutex::new(None),
        }
    }

    fn down() -> Self {
        Self {
            reply: None,
            last_prompt: Mutex::new(None),
        }
    }
}

impl InsightTransport for CannedTransport {
    async fn send(&self, prompt: &str) -> Result<InsightReply, InsightError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply
            .clone()
            .map(InsightReply::text)
            .ok_or_else(|| InsightError::Upstream("down".into()))
    }
}

fn gateway(transport: CannedTransport) -> InsightGateway<CannedTransport> {
    InsightGateway::new(transport, RetryPolicy::no_delay(1))
}

fn transactions() -> Vec<Transaction> {
    vec![Transaction {
        id: "TXN-0001".into(),
        reference: "INV-1".into(),
        amount: 990_000.0,
        currency: "USD".into(),
        counterparty: "Unknown Shell Co".into(),
        corridor: Some("US-KY".into()),
        status: TransactionStatus::Pending,
        timestamp: Utc::now(),
    }]
}

#[tokio::test]
async fn anomalies_parse_live_answer() {
    let answer = json!({
        "detected": true,
        "severity": "HIGH",
        "summary": "Large payment to a new counterparty",
        "flaggedTransactionIds": ["TXN-0001"],
        "recommendation": "Hold and verify beneficiary"
    });
    let gw = gateway(CannedTransport::answering(format!("```json\n{answer}\n```")));

    let insight = gw.detect_anomalies(&transactions()).await;

    assert!(insight.is_live());
    let alert = insight.into_value();
    assert!(alert.detected);
    assert_eq!(alert.flagged_transaction_ids, vec!["TXN-0001".to_string()]);

    let prompt = gw.transport().last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("Unknown Shell Co"));
    assert!(prompt.contains("flaggedTransactionIds"));
}

#[tokio::test]
async fn anomalies_fall_back_when_down() {
    let gw = gateway(CannedTransport::down());
    let insight = gw.detect_anomalies(&transactions()).await;
    assert_eq!(insight, Insight::Fallback(AnomalyAlert::fallback()));
}

#[tokio::test]
async fn payroll_falls_back_on_wrong_shape() {
    let gw = gateway(CannedTransport::answering(r#"{"compliant": "probably"}"#));
    let employees = vec![Employee {
        id: "EMP-0001".into(),
        name: "Dana".into(),
        role: "Treasury Lead".into(),
        department: "Finance".into(),
        country: "US".into(),
        salary: 14_500.0,
        currency: "USD".into(),
        status: EmployeeStatus::Active,
    }];
    let insight = gw.audit_payroll(&employees).await;
    assert_eq!(insight, Insight::Fallback(PayrollAudit::fallback()));
}

#[tokio::test]
async fn liquidity_forecast_is_live() {
    let gw = gateway(CannedTransport::answering(
        r#"{"coverageDays": 41.5, "shortfallRisk": "LOW", "recommendedRebalance": [], "summary": "ok"}"#,
    ));
    let sources = vec![LiquiditySource {
        name: "Operating USD".into(),
        currency: "USD".into(),
        available: 1_000_000.0,
        daily_burn: 24_000.0,
    }];
    let insight = gw.forecast_liquidity(&sources).await;
    assert!(insight.is_live());
    assert!((insight.value().coverage_days - 41.5).abs() < f64::EPSILON);
}
