use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use pf_core::enums::TransactionStatus;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Top-level CLI parser for the `pfctl` binary.
#[derive(Debug, Parser)]
#[command(name = "pfctl", version, about = "PayFlow API and Insight Gateway client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root, e.g. http://127.0.0.1:5051/api (overrides `gateway.api_base`)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Umbrella id sent as x-umbrella-id (overrides `gateway.umbrella_id`)
    #[arg(short, long, global = true)]
    pub umbrella: Option<String>,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the API is up.
    Health,

    /// Send a free-form prompt through the Insight Gateway.
    Ask {
        /// Prompt text.
        prompt: String,
    },

    /// Run a structured treasury insight over a JSON context file.
    Insight {
        kind: InsightKind,

        /// JSON file holding the context array (transactions, market data, ...).
        #[arg(short, long)]
        context: PathBuf,
    },

    /// Manage the local remittance-tracking journal.
    Remit {
        #[command(subcommand)]
        action: RemitAction,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum InsightKind {
    /// Transactions -> anomaly alert.
    Anomalies,
    /// Transactions -> cash-flow forecast.
    CashFlow,
    /// Market data -> trade opportunities.
    Trades,
    /// Employees -> payroll audit.
    Payroll,
    /// Liquidity sources -> liquidity forecast.
    Liquidity,
}

#[derive(Debug, Subcommand)]
pub enum RemitAction {
    /// Record a remittance, or update one already tracked under `--id`.
    Track {
        /// Existing journal id to update. A new id is generated when absent.
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        reference: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        counterparty: String,
        #[arg(long)]
        corridor: Option<String>,
        #[arg(long, value_parser = parse_status, default_value = "PENDING")]
        status: TransactionStatus,
    },
    /// List tracked remittances.
    List,
    /// Delete every tracked remittance.
    Clear,
}

fn parse_status(value: &str) -> Result<TransactionStatus, String> {
    serde_json::from_value(serde_json::Value::String(value.to_ascii_uppercase()))
        .map_err(|_| format!("unknown status '{value}' (PENDING, PROCESSING, COMPLETED, FAILED)"))
}
