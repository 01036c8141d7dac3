//! Treasury insights built on [`InsightGateway::request_json`].
//!
//! Each operation serializes its context, appends the JSON Schema of the
//! shape it wants back, and falls back to the shape's default when the model
//! cannot deliver.

use serde::Serialize;

use pf_core::entities::{Employee, Transaction};
use pf_core::insights::{
    AnomalyAlert, CashFlowForecast, InsightShape, LiquidityForecast, LiquiditySource,
    MarketPulse, PayrollAudit, TradeOpportunities,
};
use pf_core::provenance::Insight;

use crate::gateway::InsightGateway;
use crate::transport::InsightTransport;

/// Build a prompt asking for `S`, with `context` embedded as JSON.
#[must_use]
pub fn shaped_prompt<S: InsightShape>(task: &str, label: &str, context: &impl Serialize) -> String {
    let context = serde_json::to_string_pretty(context).unwrap_or_default();
    let schema = serde_json::to_string_pretty(&schemars::schema_for!(S)).unwrap_or_default();
    format!(
        "You are a treasury analyst for a cross-border payments company.\n\
         {task}\n\n\
         {label}:\n{context}\n\n\
         Respond with one JSON object that conforms to this JSON Schema and nothing else:\n\
         {schema}"
    )
}

impl<T: InsightTransport> InsightGateway<T> {
    async fn request_shape<S: InsightShape>(&self, prompt: &str) -> Insight<S> {
        let insight = self.request_json(prompt, S::fallback()).await;
        tracing::debug!(kind = S::KIND, provenance = insight.provenance(), "insight ready");
        insight
    }

    /// Screen transactions for fraud or operational anomalies.
    pub async fn detect_anomalies(&self, transactions: &[Transaction]) -> Insight<AnomalyAlert> {
        let prompt = shaped_prompt::<AnomalyAlert>(
            "Review these transactions for fraud, duplicate payments, unusual amounts or \
             unusual corridors. Flag the ids of suspicious transactions.",
            "Transactions",
            &transactions,
        );
        self.request_shape(&prompt).await
    }

    /// Project net cash position 30 and 90 days out.
    pub async fn forecast_cash_flow(&self, transactions: &[Transaction]) -> Insight<CashFlowForecast> {
        let prompt = shaped_prompt::<CashFlowForecast>(
            "Project the net cash position 30 and 90 days from now based on these \
             transactions, with a confidence between 0 and 1 and the main drivers.",
            "Transactions",
            &transactions,
        );
        self.request_shape(&prompt).await
    }

    /// Suggest FX trades from current market observations.
    pub async fn scan_trade_opportunities(&self, market: &[MarketPulse]) -> Insight<TradeOpportunities> {
        let prompt = shaped_prompt::<TradeOpportunities>(
            "Suggest FX trades (BUY, SELL or HOLD per pair) with expected return and a \
             one-sentence rationale.",
            "Market data",
            &market,
        );
        self.request_shape(&prompt).await
    }

    /// Check payroll for compliance issues and cost risk.
    pub async fn audit_payroll(&self, employees: &[Employee]) -> Insight<PayrollAudit> {
        let prompt = shaped_prompt::<PayrollAudit>(
            "Audit this payroll for compliance issues across countries, currency exposure \
             and cost outliers. Give a risk score from 0 to 100.",
            "Employees",
            &employees,
        );
        self.request_shape(&prompt).await
    }

    /// Estimate how long available liquidity covers expected outflows.
    pub async fn forecast_liquidity(&self, sources: &[LiquiditySource]) -> Insight<LiquidityForecast> {
        let prompt = shaped_prompt::<LiquidityForecast>(
            "Estimate how many days these liquidity sources cover their expected outflows, \
             rate the shortfall risk LOW, MEDIUM or HIGH and recommend rebalancing moves.",
            "Liquidity sources",
            &sources,
        );
        self.request_shape(&prompt).await
    }
}
