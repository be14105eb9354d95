use crate::constants::{ddragon, env_vars, rate_limit};
use crate::error::AppError;
use crate::riot_api::{BackoffPolicy, regional_base_url};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod credentials;
pub mod paths;
pub mod user_prompts;
pub mod validation;

pub use credentials::Credentials;
use paths::{get_config_path, get_log_dir_path};
use user_prompts::{prompt_for_api_key, prompt_for_region};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing the credentials and client settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Platform routing value (e.g. `euw1`). Becomes the API host prefix.
    pub region: String,
    /// Riot API key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Overrides `https://{region}.api.riotgames.com` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_domain: Option<String>,
    /// Overrides the Data Dragon host used for the champion catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddragon_domain: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Wait before the single short retry after a rate limit response.
    #[serde(default = "default_short_wait")]
    pub rate_limit_short_wait_ms: u64,
    /// Total wait before the final attempt; the short wait is subtracted from it.
    #[serde(default = "default_long_wait")]
    pub rate_limit_long_wait_ms: u64,
}

fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_short_wait() -> u64 {
    rate_limit::SHORT_WAIT_MS
}

fn default_long_wait() -> u64 {
    rate_limit::LONG_WAIT_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            region: String::new(),
            api_key: String::new(),
            api_domain: None,
            ddragon_domain: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            rate_limit_short_wait_ms: default_short_wait(),
            rate_limit_long_wait_ms: default_long_wait(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, credentials are taken from the environment or
    /// prompted for, and the result is saved.
    ///
    /// # Environment Variables
    /// - `RIOT_REGION` - Override region
    /// - `RIOT_API_KEY` - Override API key
    /// - `RIOT_API_DOMAIN` - Override the regional API host
    /// - `RIOT_LOG_FILE` - Override log file path
    /// - `RIOT_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// Environment variables take precedence over the config file.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if std::env::var(env_vars::API_KEY).is_ok()
            && std::env::var(env_vars::REGION).is_ok()
        {
            // Filled in by the overrides below
            Config::default()
        } else {
            let region = match std::env::var(env_vars::REGION) {
                Ok(region) => region,
                Err(_) => prompt_for_region().await?,
            };
            let api_key = match std::env::var(env_vars::API_KEY) {
                Ok(key) => key,
                Err(_) => prompt_for_api_key().await?,
            };

            let config = Config {
                region,
                api_key,
                ..Config::default()
            };

            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `RIOT_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(region) = std::env::var(env_vars::REGION) {
            self.region = region;
        }

        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = Some(api_domain);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Immutable credentials for the lifetime of a client.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.trim(), self.region.trim())
    }

    /// Base URL for Riot API calls: the configured override or the regional host.
    pub fn api_base_url(&self) -> String {
        match &self.api_domain {
            Some(domain) => normalize_domain(domain),
            None => regional_base_url(self.region.trim()),
        }
    }

    /// Base URL of the champion catalog feed.
    pub fn ddragon_base_url(&self) -> String {
        self.ddragon_domain
            .as_deref()
            .map(normalize_domain)
            .unwrap_or_else(|| ddragon::DEFAULT_DOMAIN.to_string())
    }

    /// Rate-limit backoff built from the configured waits.
    pub fn backoff_policy(&self) -> BackoffPolicy {
        BackoffPolicy::new(
            Duration::from_millis(self.rate_limit_short_wait_ms),
            Duration::from_millis(self.rate_limit_long_wait_ms),
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes the
    /// domain overrides (scheme added, trailing slash removed).
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_domain: self.api_domain.as_deref().map(normalize_domain),
            ddragon_domain: self.ddragon_domain.as_deref().map(normalize_domain),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout. The API key is masked.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Region:");
            println!("{}", config.region);
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", config.credentials().masked_key());
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url());
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Rate Limit Backoff:");
            println!(
                "{} ms, then {} ms",
                config.rate_limit_short_wait_ms, config.rate_limit_long_wait_ms
            );
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }
}

/// Adds `https://` when no scheme is given and strips trailing slashes.
fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    }
}
