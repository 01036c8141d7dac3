use serde::Serialize;

use pf_config::GatewayConfig;
use pf_insight::InsightGateway;

use crate::cli::OutputFormat;
use crate::output::output;

#[derive(Serialize)]
struct AskAnswer<'a> {
    prompt: &'a str,
    text: String,
}

/// `pfctl ask <prompt>`: one retried text request.
pub async fn handle(gateway: &GatewayConfig, prompt: &str, format: OutputFormat) -> anyhow::Result<()> {
    let client = InsightGateway::from_config(gateway)?;
    let Some(text) = client.request_text(prompt).await else {
        anyhow::bail!(
            "no answer from {} after {} attempts",
            gateway.api_root(),
            client.policy().attempts()
        );
    };
    match format {
        OutputFormat::Raw => {
            println!("{text}");
            Ok(())
        }
        OutputFormat::Json => output(&AskAnswer { prompt, text }, format),
    }
}
