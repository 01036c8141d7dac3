//! Trade execution: settlement delta plus a `trade.executed` webhook event.

use chrono::Utc;
use serde_json::json;

use pf_core::entities::WebhookEvent;
use pf_core::enums::DeliveryStatus;
use pf_core::trade::{TradeRequest, settlement_delta};

use crate::LedgerStore;
use crate::error::LedgerError;

/// Event name recorded for every executed trade.
pub const TRADE_EXECUTED_EVENT: &str = "trade.executed";

/// Internal sink the treasury desk's events are delivered to.
pub const TREASURY_ENDPOINT: &str = "internal://treasury";

/// Outcome of [`LedgerStore::execute_trade`].
#[derive(Debug, Clone, PartialEq)]
pub struct TradeExecution {
    pub delta: f64,
    pub event: WebhookEvent,
}

impl LedgerStore {
    /// Execute a trade: compute its settlement delta and record the
    /// `trade.executed` event at the front of the webhook log.
    pub async fn execute_trade(
        &self,
        umbrella: &str,
        trade: TradeRequest,
    ) -> Result<TradeExecution, LedgerError> {
        trade.validate()?;
        let delta = settlement_delta(&trade);
        self.with_tenant_mut(umbrella, |t| {
            let id = t.webhooks.fresh_id()?;
            let event = WebhookEvent {
                id,
                event: TRADE_EXECUTED_EVENT.into(),
                endpoint: TREASURY_ENDPOINT.into(),
                status: DeliveryStatus::Delivered,
                payload: json!({
                    "pair": trade.pair,
                    "side": trade.side,
                    "notional": trade.notional,
                    "quotedRate": trade.quoted_rate,
                    "executionRate": trade.execution_rate.unwrap_or(trade.quoted_rate),
                    "delta": delta,
                }),
                timestamp: Utc::now(),
            };
            tracing::info!(umbrella, id = %event.id, pair = %trade.pair, delta, "trade executed");
            t.webhooks.prepend(event.clone());
            Ok(TradeExecution { delta, event })
        })
        .await
    }
}
