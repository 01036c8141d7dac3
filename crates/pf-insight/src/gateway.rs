//! The Insight Gateway: retrying text requests and typed JSON coercion.
//!
//! Neither entry point ever returns an error. Failures are logged and show
//! up as `None` from [`InsightGateway::request_text`] or as
//! [`Insight::Fallback`] from [`InsightGateway::request_json`].

use serde::de::DeserializeOwned;

use pf_config::GatewayConfig;
use pf_core::provenance::Insight;

use crate::coerce::coerce_json;
use crate::error::InsightError;
use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, InsightTransport};

/// Retrying, never-failing front end to an [`InsightTransport`].
///
/// Holds no mutable state; share it freely across tasks.
#[derive(Debug, Clone)]
pub struct InsightGateway<T = HttpTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl InsightGateway<HttpTransport> {
    /// Gateway over HTTP, configured from the `gateway` section.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, InsightError> {
        Ok(Self::new(
            HttpTransport::new(config)?,
            RetryPolicy::from_config(config),
        ))
    }
}

impl<T: InsightTransport> InsightGateway<T> {
    #[must_use]
    pub const fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `prompt`, retrying with linear backoff.
    ///
    /// Returns the reply text (empty if the reply had none), or `None` once
    /// every attempt has failed.
    pub async fn request_text(&self, prompt: &str) -> Option<String> {
        let attempts = self.policy.attempts();
        for attempt in 1..=attempts {
            let failure = match self.transport.send(prompt).await {
                Ok(reply) if reply.success => return Some(reply.text.unwrap_or_default()),
                Ok(reply) => InsightError::Upstream(
                    reply
                        .message
                        .or(reply.error)
                        .unwrap_or_else(|| "reply reported failure".to_string()),
                ),
                Err(e) => e,
            };

            if attempt < attempts {
                let delay = self.policy.delay_before_retry(attempt);
                tracing::warn!(
                    attempt,
                    attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %failure,
                    "insight request failed, retrying"
                );
                tokio::time::sleep(delay).await;
            } else {
                tracing::error!(attempts, error = %failure, "insight request failed, giving up");
            }
        }
        None
    }

    /// Request `prompt` and coerce the answer into `S`.
    ///
    /// Falls back to `fallback` when the request fails or the answer does
    /// not parse, either as a whole or as its brace-delimited core.
    pub async fn request_json<S: DeserializeOwned>(&self, prompt: &str, fallback: S) -> Insight<S> {
        let Some(text) = self.request_text(prompt).await else {
            return Insight::Fallback(fallback);
        };
        match coerce_json(&text) {
            Some(value) => Insight::Live(value),
            None => {
                tracing::warn!(len = text.len(), "insight answer was not valid JSON, using fallback");
                Insight::Fallback(fallback)
            }
        }
    }
}
