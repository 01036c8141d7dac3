//! Insight result shapes, the context records they are computed from, and
//! the fallback instance of every shape.
//!
//! The gateway asks the model to answer in exactly one of these shapes. When
//! the model is unreachable or answers with something that does not parse,
//! the shape's [`InsightShape::fallback`] is used instead.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A result shape the Insight Gateway can produce.
pub trait InsightShape: Serialize + DeserializeOwned + JsonSchema + Send + 'static {
    /// Stable name used in logs and CLI output.
    const KIND: &'static str;

    /// The safe default used when live data is unavailable.
    fn fallback() -> Self;
}

// ---------------------------------------------------------------------------
// Context records
// ---------------------------------------------------------------------------

/// A point-in-time FX market observation fed to the trade scanner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketPulse {
    /// Currency pair, e.g. `"EUR/USD"`.
    pub pair: String,
    pub rate: f64,
    /// 24h change in percent.
    pub change_pct: f64,
    pub volatility: f64,
}

/// A pool of funds the liquidity forecaster can draw on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiquiditySource {
    pub name: String,
    pub currency: String,
    pub available: f64,
    /// Expected daily outflow from this source.
    pub daily_burn: f64,
}

// ---------------------------------------------------------------------------
// AnomalyAlert
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyAlert {
    pub detected: bool,
    /// `"LOW"`, `"MEDIUM"`, `"HIGH"` or `"CRITICAL"`.
    pub severity: String,
    pub summary: String,
    pub flagged_transaction_ids: Vec<String>,
    pub recommendation: String,
}

impl InsightShape for AnomalyAlert {
    const KIND: &'static str = "anomaly_alert";

    fn fallback() -> Self {
        Self {
            detected: false,
            severity: "LOW".to_string(),
            summary: "Anomaly screening is unavailable; no live assessment was made.".to_string(),
            flagged_transaction_ids: Vec::new(),
            recommendation: "Review recent high-value transactions manually.".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// CashFlowForecast
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowForecast {
    #[serde(rename = "projected30d")]
    pub projected_30d: f64,
    #[serde(rename = "projected90d")]
    pub projected_90d: f64,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    pub drivers: Vec<String>,
    pub summary: String,
}

impl InsightShape for CashFlowForecast {
    const KIND: &'static str = "cash_flow_forecast";

    fn fallback() -> Self {
        Self {
            projected_30d: 0.0,
            projected_90d: 0.0,
            confidence: 0.0,
            drivers: Vec::new(),
            summary: "Cash-flow forecasting is unavailable.".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// TradeOpportunities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeOpportunity {
    pub pair: String,
    /// `"BUY"`, `"SELL"` or `"HOLD"`.
    pub action: String,
    pub expected_return_pct: f64,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeOpportunities {
    pub opportunities: Vec<TradeOpportunity>,
}

impl InsightShape for TradeOpportunities {
    const KIND: &'static str = "trade_opportunities";

    fn fallback() -> Self {
        Self {
            opportunities: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// PayrollAudit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollAudit {
    pub compliant: bool,
    pub issues: Vec<String>,
    pub total_monthly_cost: f64,
    /// Risk in `[0, 100]`.
    pub risk_score: f64,
    pub summary: String,
}

impl InsightShape for PayrollAudit {
    const KIND: &'static str = "payroll_audit";

    fn fallback() -> Self {
        Self {
            compliant: true,
            issues: Vec::new(),
            total_monthly_cost: 0.0,
            risk_score: 0.0,
            summary: "Payroll audit is unavailable; no live checks were run.".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// LiquidityForecast
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityForecast {
    pub coverage_days: f64,
    /// `"LOW"`, `"MEDIUM"` or `"HIGH"`.
    pub shortfall_risk: String,
    pub recommended_rebalance: Vec<String>,
    pub summary: String,
}

impl InsightShape for LiquidityForecast {
    const KIND: &'static str = "liquidity_forecast";

    fn fallback() -> Self {
        Self {
            coverage_days: 0.0,
            shortfall_risk: "UNKNOWN".to_string(),
            recommended_rebalance: Vec::new(),
            summary: "Liquidity forecasting is unavailable.".to_string(),
        }
    }
}

/// `serde_json::Value` accepts any JSON, which makes it the shape of choice
/// for free-form callers.
impl InsightShape for serde_json::Value {
    const KIND: &'static str = "json";

    fn fallback() -> Self {
        Self::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cash_flow_uses_dashboard_field_names() {
        let json = serde_json::to_value(CashFlowForecast::fallback()).unwrap();
        assert!(json.get("projected30d").is_some());
        assert!(json.get("projected90d").is_some());
    }

    #[test]
    fn anomaly_alert_parses_model_output() {
        let text = r#"{
            "detected": true,
            "severity": "HIGH",
            "summary": "Two transfers to a new counterparty within a minute",
            "flaggedTransactionIds": ["TXN-1A2B", "TXN-3C4D"],
            "recommendation": "Hold and call the requester"
        }"#;
        let alert: AnomalyAlert = serde_json::from_str(text).unwrap();
        assert!(alert.detected);
        assert_eq!(alert.flagged_transaction_ids, vec!["TXN-1A2B", "TXN-3C4D"]);
    }

    #[test]
    fn fallbacks_serialize() {
        for value in [
            serde_json::to_value(AnomalyAlert::fallback()),
            serde_json::to_value(CashFlowForecast::fallback()),
            serde_json::to_value(TradeOpportunities::fallback()),
            serde_json::to_value(PayrollAudit::fallback()),
            serde_json::to_value(LiquidityForecast::fallback()),
        ] {
            assert!(value.unwrap().is_object());
        }
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            AnomalyAlert::KIND,
            CashFlowForecast::KIND,
            TradeOpportunities::KIND,
            PayrollAudit::KIND,
            LiquidityForecast::KIND,
        ];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }
}
