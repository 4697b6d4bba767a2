use anyhow::Context;
use colored::Colorize;
use par_crypto::AccountKey;
use par_server::{RegistryServer, ServerConfig, LEDGER_ACCOUNT_ENV};
use par_types::{AssetId, AssetUploadRequest, GpsCoordinates};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ServerConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Serve(args) => cmd_serve(config, args).await,
        Command::Upload(args) => cmd_upload(config, args).await,
        Command::List(_) => cmd_list(config).await,
        Command::Get(args) => cmd_get(config, args).await,
        Command::Balance(_) => cmd_balance(config).await,
        Command::Keygen(args) => cmd_keygen(config, args),
    }
}

async fn cmd_serve(mut config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    RegistryServer::new(config).serve().await?;
    Ok(())
}

async fn cmd_upload(config: ServerConfig, args: UploadArgs) -> anyhow::Result<()> {
    let timestamp = match &args.timestamp {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid timestamp: {raw}"))?,
        None => chrono::Utc::now().naive_utc(),
    };
    let request = AssetUploadRequest {
        description: args.description,
        content: args.content,
        location: GpsCoordinates::new(args.latitude, args.longitude),
        timestamp,
        creator: args.creator,
        publisher: args.publisher,
    };

    let state = RegistryServer::new(config).build_state().await?;
    let outcome = state.registry.save_and_link(&request).await?;

    println!("{} Asset registered", "✓".green().bold());
    println!("  Asset ID: {}", outcome.asset_id.to_hex().yellow());
    match outcome.transaction {
        Some(tx) => println!("  Ledger transaction: {}", tx.to_string().cyan()),
        None => println!(
            "  Ledger transaction: {}",
            "none (ledger unavailable or not configured)".dimmed()
        ),
    }
    Ok(())
}

async fn cmd_list(config: ServerConfig) -> anyhow::Result<()> {
    let state = RegistryServer::new(config).build_state().await?;
    let assets = state.registry.list().await?;
    if assets.is_empty() {
        println!("No assets registered.");
        return Ok(());
    }
    for summary in assets {
        println!("{}  {}", summary.asset_id.to_hex().yellow(), summary.description);
    }
    Ok(())
}

async fn cmd_get(config: ServerConfig, args: GetArgs) -> anyhow::Result<()> {
    let id: AssetId = args
        .asset_id
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid asset ID: {e}"))?;

    let state = RegistryServer::new(config).build_state().await?;
    let Some(asset) = state.registry.retrieve(&id).await? else {
        anyhow::bail!("asset not found: {id}");
    };
    println!("{}", serde_json::to_string_pretty(&asset)?);
    if let Some(tx) = state.registry.linked_transaction(&id).await? {
        println!("Ledger transaction: {}", tx.to_string().cyan());
    }
    Ok(())
}

async fn cmd_balance(config: ServerConfig) -> anyhow::Result<()> {
    let state = RegistryServer::new(config).build_state().await?;
    let notary = state
        .notary
        .context("no ledger account configured (set PAR_LEDGER_ACCOUNT or [ledger].account)")?;
    let balance = notary.balance().await?;
    println!("Account: {}", balance.address.bold());
    println!("Balance: {}", balance.balance);
    Ok(())
}

fn cmd_keygen(config: ServerConfig, args: KeygenArgs) -> anyhow::Result<()> {
    let key_dir = args.key_dir.unwrap_or(config.ledger.key_dir);
    let key = AccountKey::generate();
    let path = key.save(&key_dir)?;

    println!("{} Generated ledger account", "✓".green().bold());
    println!("  Address: {}", key.address().bold());
    println!("  Key file: {}", path.display());
    println!(
        "  Set {} (or [ledger].account in the config) to enable notarization.",
        LEDGER_ACCOUNT_ENV.cyan()
    );
    Ok(())
}
