//! First-run prompts for the credentials when no config file exists.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

async fn prompt(message: &str) -> Result<String, AppError> {
    println!("{message}");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}

/// Asks for the platform routing value, e.g. `euw1`.
pub async fn prompt_for_region() -> Result<String, AppError> {
    prompt("Please enter your region (platform id, e.g. euw1, na1, kr): ").await
}

/// Asks for the Riot developer API key.
pub async fn prompt_for_api_key() -> Result<String, AppError> {
    prompt("Please enter your Riot API key: ").await
}
