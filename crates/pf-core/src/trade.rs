//! FX trade execution request and settlement delta.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TradeSide;
use crate::errors::CoreError;

/// Body of `POST /api/trades/execute`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    /// Currency pair, e.g. `"EUR/USD"`.
    pub pair: String,
    pub side: TradeSide,
    /// Trade size in the base currency.
    pub notional: f64,
    /// Rate shown to the treasurer when the trade was staged.
    pub quoted_rate: f64,
    /// Rate the trade actually filled at. Absent means it filled at the quote.
    #[serde(default)]
    pub execution_rate: Option<f64>,
}

impl TradeRequest {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank pair, a non-positive
    /// notional, or non-positive rates.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.pair.trim().is_empty() {
            return Err(CoreError::Validation("'pair' must not be empty".into()));
        }
        if !self.notional.is_finite() || self.notional <= 0.0 {
            return Err(CoreError::Validation("'notional' must be positive".into()));
        }
        let rates = std::iter::once(self.quoted_rate).chain(self.execution_rate);
        for rate in rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CoreError::Validation("rates must be positive".into()));
            }
        }
        Ok(())
    }
}

/// Settlement delta of a trade in quote currency, rounded to cents.
///
/// `(execution_rate - quoted_rate) * notional`, signed by side: a buy that
/// fills above the quote costs more (positive delta), a sell that fills above
/// the quote earns more (negative delta). A trade without an execution rate
/// filled at the quote and has a delta of zero.
#[must_use]
pub fn settlement_delta(trade: &TradeRequest) -> f64 {
    let fill = trade.execution_rate.unwrap_or(trade.quoted_rate);
    let raw = (fill - trade.quoted_rate) * trade.notional * trade.side.sign();
    let rounded = (raw * 100.0).round() / 100.0;
    // Avoid reporting -0.0 for sells that filled at the quote.
    if rounded == 0.0 { 0.0 } else { rounded }
}
