//! The rate-limited GET wrapper and its error mapping

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::rate_limit::{ApiStatus, BackoffPolicy, is_rate_limited, status_from_body};
use super::urls::{build_api_url, display_url};
use crate::error::AppError;

/// Outcome of one HTTP request that did not fail outright.
enum Attempt {
    Document(Value),
    RateLimited(String),
}

/// Performs a GET against the Riot API and returns the parsed JSON document.
///
/// The API key is appended as a query parameter (see [`build_api_url`]). When
/// a response is rate limited (HTTP 429 or a body with `status.status_code`
/// 429) the call follows `policy`: one retry after the short wait, one final
/// attempt after the rest of the long wait. If that final attempt is still
/// rate limited the call fails with [`AppError::ApiRateLimit`].
///
/// No response is cached.
///
/// # Errors
/// Network failures, malformed bodies and non-2xx responses are returned as
/// upstream errors naming the URL (without the key) and the cause.
#[instrument(skip(client, api_key, policy))]
pub async fn call(
    client: &Client,
    base_url: &str,
    path: &str,
    api_key: &str,
    policy: &BackoffPolicy,
) -> Result<Value, AppError> {
    let url = build_api_url(base_url, path, api_key);
    let shown_url = display_url(base_url, path);

    let mut attempt = 1u32;
    loop {
        info!("Fetching {shown_url} (attempt {attempt})");
        match send(client, &url, &shown_url).await? {
            Attempt::Document(value) => return Ok(value),
            Attempt::RateLimited(message) => match policy.delay_after(attempt) {
                Some(wait) => {
                    warn!(
                        "Rate limited by {} ({}). Retrying in {:?} (attempt {}/{})",
                        shown_url,
                        message,
                        wait,
                        attempt + 1,
                        BackoffPolicy::MAX_ATTEMPTS
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                None => {
                    error!("Still rate limited after {attempt} attempts: {shown_url}");
                    return Err(AppError::api_rate_limit(message, shown_url));
                }
            },
        }
    }
}

/// [`call`] followed by deserialization into a typed record. A document that
/// does not match `T` fails with [`AppError::ApiUnexpectedStructure`].
pub async fn call_as<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    path: &str,
    api_key: &str,
    policy: &BackoffPolicy,
) -> Result<T, AppError> {
    let value = call(client, base_url, path, api_key, policy).await?;
    parse_document(value, &display_url(base_url, path))
}

/// Single GET of a public, keyless JSON resource (the champion feed).
/// A rate-limited answer is an error straight away.
#[instrument(skip(client))]
pub async fn fetch_public<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");
    match send(client, url, url).await? {
        Attempt::Document(value) => parse_document(value, url),
        Attempt::RateLimited(message) => Err(AppError::api_rate_limit(message, url)),
    }
}

fn parse_document<T: DeserializeOwned>(value: Value, shown_url: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| {
        error!("Unexpected response structure from {shown_url}: {e}");
        AppError::api_unexpected_structure(e.to_string(), shown_url)
    })
}

async fn send(client: &Client, url: &str, shown_url: &str) -> Result<Attempt, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| request_error(e, shown_url))?;

    let status = response.status();
    debug!("Response status: {status}");

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response body from {shown_url}: {e}");
        AppError::ApiFetch(e.without_url())
    })?;
    debug!("Response length: {} bytes", text.len());

    let parsed = serde_json::from_str::<Value>(&text).ok();
    let body_status = parsed.as_ref().and_then(status_from_body);

    if is_rate_limited(status.as_u16(), body_status.as_ref()) {
        let message = status_message(body_status.as_ref())
            .unwrap_or_else(|| "Rate limit exceeded".to_string());
        return Ok(Attempt::RateLimited(message));
    }

    // A status block with an error code is a failure even under HTTP 200
    let effective_status = match &body_status {
        Some(s) if s.status_code >= 400 => s.status_code,
        _ => status.as_u16(),
    };

    if !(200..300).contains(&effective_status) {
        let message = status_message(body_status.as_ref()).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });
        error!("HTTP {} - {} (URL: {})", effective_status, message, shown_url);
        return Err(status_error(effective_status, message, shown_url));
    }

    match parsed {
        Some(value) => Ok(Attempt::Document(value)),
        None => {
            let preview: String = text.chars().take(200).collect();
            error!("Response from {shown_url} is not JSON (first 200 chars): {preview}");
            if text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", shown_url))
            } else {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    shown_url,
                ))
            }
        }
    }
}

fn status_message(body_status: Option<&ApiStatus>) -> Option<String> {
    body_status
        .map(|s| s.message.clone())
        .filter(|m| !m.is_empty())
}

/// Maps a non-success status to the matching upstream error
fn status_error(status_code: u16, message: String, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(message, url),
        400..=499 => AppError::api_client_error(status_code, message, url),
        502 | 503 => AppError::api_service_unavailable(status_code, message, url),
        _ => AppError::api_server_error(status_code, message, url),
    }
}

/// reqwest errors carry the full URL, key included; it is stripped here.
fn request_error(e: reqwest::Error, shown_url: &str) -> AppError {
    let (is_timeout, is_connect) = (e.is_timeout(), e.is_connect());
    let e = e.without_url();
    error!("Request failed for URL {}: {}", shown_url, e);
    if is_timeout {
        AppError::network_timeout(shown_url)
    } else if is_connect {
        AppError::network_connection(shown_url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}
