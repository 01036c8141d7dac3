use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use pf_config::GatewayConfig;
use pf_insight::InsightGateway;

use crate::cli::{InsightKind, OutputFormat};
use crate::output::output;

fn read_context<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read context file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("context file {} is not the expected JSON array", path.display()))
}

/// `pfctl insight <kind> --context <file>`.
///
/// Prints `{ "kind": "live" | "fallback", "value": ... }`; a fallback is
/// still a successful run.
pub async fn handle(
    gateway: &GatewayConfig,
    kind: InsightKind,
    context: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = InsightGateway::from_config(gateway)?;
    match kind {
        InsightKind::Anomalies => {
            let txns = read_context(context)?;
            output(&client.detect_anomalies(&txns).await, format)
        }
        InsightKind::CashFlow => {
            let txns = read_context(context)?;
            output(&client.forecast_cash_flow(&txns).await, format)
        }
        InsightKind::Trades => {
            let market = read_context(context)?;
            output(&client.scan_trade_opportunities(&market).await, format)
        }
        InsightKind::Payroll => {
            let employees = read_context(context)?;
            output(&client.audit_payroll(&employees).await, format)
        }
        InsightKind::Liquidity => {
            let sources = read_context(context)?;
            output(&client.forecast_liquidity(&sources).await, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::insights::MarketPulse;

    #[test]
    fn reads_context_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.json");
        std::fs::write(
            &path,
            r#"[{"pair":"EUR/USD","rate":1.08,"changePct":0.2,"volatility":0.1}]"#,
        )
        .unwrap();
        let market: Vec<MarketPulse> = read_context(&path).unwrap();
        assert_eq!(market.len(), 1);
        assert_eq!(market[0].pair, "EUR/USD");
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"not":"an array"}"#).unwrap();
        assert!(read_context::<MarketPulse>(&path).is_err());
    }
}
