pub mod ask;
pub mod health;
pub mod insight;
pub mod remit;

use pf_config::GatewayConfig;

use crate::cli::{Cli, Commands, OutputFormat};

/// Route a parsed command to its handler.
pub async fn dispatch(cli: Cli, gateway: &GatewayConfig) -> anyhow::Result<()> {
    let format: OutputFormat = cli.format;
    match cli.command {
        Commands::Health => health::handle(gateway, format).await,
        Commands::Ask { prompt } => ask::handle(gateway, &prompt, format).await,
        Commands::Insight { kind, context } => {
            insight::handle(gateway, kind, &context, format).await
        }
        Commands::Remit { action } => remit::handle(action, format),
    }
}
