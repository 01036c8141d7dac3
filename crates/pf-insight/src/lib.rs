//! # pf-insight
//!
//! Best-effort AI insights for PayFlow.
//!
//! - [`InsightGateway`] sends a prompt to the `/api/ai/insights` endpoint,
//!   retrying with linear backoff, and coerces answers into typed JSON. It
//!   never fails: callers get `None` or an [`Insight::Fallback`].
//! - [`GeminiClient`] is the server-side client for the hosted model that
//!   the endpoint forwards to.
//! - The advisor operations (`detect_anomalies`, `forecast_cash_flow`, ...)
//!   wrap the gateway with domain prompts and fallbacks.
//!
//! [`Insight::Fallback`]: pf_core::provenance::Insight::Fallback

pub mod advisor;
pub mod coerce;
pub mod gateway;
pub mod provider;
pub mod retry;
pub mod transport;

mod error;
mod http;

pub use error::InsightError;
pub use gateway::InsightGateway;
pub use provider::GeminiClient;
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, InsightTransport, UMBRELLA_HEADER};
