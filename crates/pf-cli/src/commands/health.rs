use std::time::Duration;

use anyhow::Context;

use pf_config::GatewayConfig;
use pf_core::responses::HealthResponse;

use crate::cli::OutputFormat;
use crate::output::output;

/// `pfctl health`: `GET {api_base}/health`.
pub async fn handle(gateway: &GatewayConfig, format: OutputFormat) -> anyhow::Result<()> {
    let url = format!("{}/health", gateway.api_root());
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(gateway.timeout_secs))
        .build()?;
    let health: HealthResponse = http
        .get(&url)
        .send()
        .await
        .with_context(|| format!("PayFlow API unreachable at {url}"))?
        .error_for_status()?
        .json()
        .await
        .context("unexpected health response")?;
    output(&health, format)
}
