use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;

use pf_config::PayflowConfig;
use pf_server::{AppState, build_router};

/// PayFlow mock ledger and AI insight API.
#[derive(Debug, Parser)]
#[command(name = "payflow-server", version, about)]
struct Args {
    /// Listen address (overrides `server.host` / `HOST`).
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides `server.port` / `PORT`).
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the built dashboard.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Start every tenant with an empty ledger instead of the seed data.
    #[arg(long)]
    no_seed: bool,
}

impl Args {
    fn apply(self, config: &mut PayflowConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = self.static_dir {
            config.server.static_dir = dir;
        }
        if self.no_seed {
            config.ledger.seed = false;
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("payflow-server error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let mut config = PayflowConfig::load_with_dotenv().context("failed to load configuration")?;
    args.apply(&mut config);

    let addr = config.server.socket_addr()?;
    let state = AppState::from_config(&config).context("failed to initialize model client")?;
    let app = build_router(state, Some(config.server.static_dir.as_path()));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        %addr,
        environment = %config.server.environment,
        seed = config.ledger.seed,
        "PayFlow API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("PayFlow API stopped");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PAYFLOW_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
