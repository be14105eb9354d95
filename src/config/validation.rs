use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Region cannot be empty and may only contain ASCII letters and digits
///   (it becomes part of the API host name)
/// - API key cannot be empty or contain whitespace
/// - Domain overrides must be a valid URL or domain name
/// - The long rate-limit wait must not be shorter than the short wait
/// - If log file path is provided, its parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.region.is_empty() {
        return Err(AppError::config_error("Region cannot be empty"));
    }
    if !config.region.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::config_error(format!(
            "Region '{}' must only contain letters and digits (e.g. euw1, na1)",
            config.region
        )));
    }

    if config.api_key.is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }
    if config.api_key.chars().any(char::is_whitespace) {
        return Err(AppError::config_error("API key cannot contain whitespace"));
    }

    if let Some(domain) = &config.api_domain {
        validate_domain("API domain", domain)?;
    }
    if let Some(domain) = &config.ddragon_domain {
        validate_domain("Data Dragon domain", domain)?;
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.rate_limit_long_wait_ms < config.rate_limit_short_wait_ms {
        return Err(AppError::config_error(format!(
            "Long rate limit wait ({} ms) cannot be shorter than the short wait ({} ms)",
            config.rate_limit_long_wait_ms, config.rate_limit_short_wait_ms
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_domain(label: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }
    if !domain.starts_with("http://")
        && !domain.starts_with("https://")
        && !domain.contains('.')
        && !domain.starts_with("localhost")
    {
        return Err(AppError::config_error(format!(
            "{label} must be a valid URL or domain name"
        )));
    }
    Ok(())
}
