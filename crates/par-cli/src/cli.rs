use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "par",
    about = "Provenance Asset Registry — content-addressed assets anchored on a ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the registry HTTP server
    Serve(ServeArgs),
    /// Register an asset
    Upload(UploadArgs),
    /// List registered assets
    List(ListArgs),
    /// Show a registered asset
    Get(GetArgs),
    /// Show the ledger account balance
    Balance(BalanceArgs),
    /// Generate a ledger account key
    Keygen(KeygenArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Override the configured bind address
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Args)]
pub struct UploadArgs {
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub content: String,
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: f64,
    /// Capture timestamp (ISO-8601, e.g. 2024-01-01T12:00:00); defaults to now
    #[arg(long)]
    pub timestamp: Option<String>,
    #[arg(long)]
    pub creator: String,
    #[arg(long)]
    pub publisher: String,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct GetArgs {
    /// Asset identifier (64 hex characters)
    pub asset_id: String,
}

#[derive(Args)]
pub struct BalanceArgs {}

#[derive(Args)]
pub struct KeygenArgs {
    /// Directory to write the key file into (defaults to the configured
    /// key directory)
    #[arg(long)]
    pub key_dir: Option<PathBuf>,
}
