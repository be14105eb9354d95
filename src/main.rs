// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, is_config_operation};
use commands::{handle_config_update_command, handle_list_config_command, run_command};
use logging::setup_logging;
use riot_stats::config::Config;
use riot_stats::error::AppError;
use riot_stats::riot_api::RiotClient;
use std::path::Path;

/// Reads the log path from an existing config file without prompting.
async fn configured_log_path() -> Option<String> {
    let config_path = Config::get_config_path();
    if !Path::new(&config_path).exists() {
        return None;
    }
    Config::load_from_path(&config_path)
        .await
        .ok()
        .and_then(|config| config.log_file_path)
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config_log_path = configured_log_path().await;
    let (log_file_path, _guard) = setup_logging(&args, config_log_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if is_config_operation(&args) {
        if args.new_region.is_some() || args.new_api_key.is_some() {
            handle_config_update_command(&args).await?;
        }
        if args.list_config {
            handle_list_config_command().await?;
        }
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let config = Config::load().await?;
    let client = RiotClient::from_config(&config)?;
    tracing::info!(
        "Using region {} via {}",
        client.credentials().region(),
        client.base_url()
    );

    if let Err(e) = run_command(&client, command).await {
        tracing::error!("Command failed: {e}");
        return Err(e);
    }

    Ok(())
}
