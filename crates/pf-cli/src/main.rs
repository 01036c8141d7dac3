use anyhow::Context;
use clap::Parser;

use pf_config::PayflowConfig;

mod cli;
mod commands;
mod journal;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pfctl error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = PayflowConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(api_base) = &cli.api_base {
        config.gateway.api_base.clone_from(api_base);
    }
    if let Some(umbrella) = &cli.umbrella {
        config.gateway.umbrella_id.clone_from(umbrella);
    }
    tracing::debug!(api = config.gateway.api_root(), umbrella = %config.gateway.umbrella_id, "resolved gateway");

    commands::dispatch(cli, &config.gateway).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PAYFLOW_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
