//! Transports that carry one prompt to the text-insight endpoint.

use std::future::Future;
use std::time::Duration;

use pf_config::GatewayConfig;
use pf_core::responses::{InsightPrompt, InsightReply};

use crate::error::InsightError;
use crate::http::check_response;

/// Header carrying the tenant on every PayFlow API call.
pub const UMBRELLA_HEADER: &str = "x-umbrella-id";

/// One request/response exchange with the insight endpoint. No retries.
pub trait InsightTransport: Send + Sync {
    fn send(&self, prompt: &str) -> impl Future<Output = Result<InsightReply, InsightError>> + Send;
}

/// `POST {api_base}/ai/insights` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    umbrella_id: String,
}

impl HttpTransport {
    /// Build a transport from the gateway config section.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, InsightError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("payflow/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/ai/insights", config.api_root()),
            umbrella_id: config.umbrella_id.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl InsightTransport for HttpTransport {
    async fn send(&self, prompt: &str) -> Result<InsightReply, InsightError> {
        let body = InsightPrompt {
            prompt: Some(prompt.to_string()),
        };
        let resp = self
            .http
            .post(&self.endpoint)
            .header(UMBRELLA_HEADER, &self.umbrella_id)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        resp.json::<InsightReply>()
            .await
            .map_err(|e| InsightError::Parse(e.to_string()))
    }
}
