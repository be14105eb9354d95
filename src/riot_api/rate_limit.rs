//! Rate-limit detection and the fixed two-step backoff.

use crate::constants::rate_limit;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Fixed backoff applied when a call is rate limited.
///
/// Attempt 1 is the original request. After a rate-limited attempt 1 the
/// client waits `short_wait` and tries once more; after a rate-limited
/// attempt 2 it waits `long_wait - short_wait` and makes a final attempt 3.
/// There is no attempt 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    short_wait: Duration,
    long_wait: Duration,
}

impl BackoffPolicy {
    /// Total number of requests a single call may make.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// `long_wait` shorter than `short_wait` is raised to `short_wait`.
    pub fn new(short_wait: Duration, long_wait: Duration) -> Self {
        Self {
            short_wait,
            long_wait: long_wait.max(short_wait),
        }
    }

    pub fn short_wait(&self) -> Duration {
        self.short_wait
    }

    pub fn long_wait(&self) -> Duration {
        self.long_wait
    }

    /// The part of the long window not already spent in the short wait
    pub fn remaining_long_wait(&self) -> Duration {
        self.long_wait.saturating_sub(self.short_wait)
    }

    /// Wait before the next attempt after `attempt` was rate limited,
    /// or `None` when the backoff is exhausted.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        match attempt {
            1 => Some(self.short_wait),
            2 => Some(self.remaining_long_wait()),
            _ => None,
        }
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(rate_limit::SHORT_WAIT_MS),
            Duration::from_millis(rate_limit::LONG_WAIT_MS),
        )
    }
}

/// The `status` block Riot sends instead of a document on failures:
/// `{"status": {"status_code": 429, "message": "Rate limit exceeded"}}`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiStatus {
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
}

/// Extracts the status block from a response body, if it has one.
pub fn status_from_body(body: &Value) -> Option<ApiStatus> {
    let status = body.get("status")?;
    serde_json::from_value(status.clone()).ok()
}

/// A response is rate limited if either the HTTP status or the body's
/// `status.status_code` says 429.
pub fn is_rate_limited(http_status: u16, body_status: Option<&ApiStatus>) -> bool {
    http_status == rate_limit::STATUS_CODE
        || body_status.is_some_and(|s| s.status_code == rate_limit::STATUS_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_policy_uses_application_windows() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.short_wait(), Duration::from_secs(1));
        assert_eq!(policy.long_wait(), Duration::from_secs(120));
        assert_eq!(policy.remaining_long_wait(), Duration::from_secs(119));
    }

    #[test]
    fn test_delay_sequence_is_bounded() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay_after(1), Some(Duration::from_secs(1)));
        assert_eq!(policy.delay_after(2), Some(Duration::from_secs(119)));
        assert_eq!(policy.delay_after(3), None);
        assert_eq!(policy.delay_after(10), None);

        let retries = (1..=BackoffPolicy::MAX_ATTEMPTS)
            .filter_map(|attempt| policy.delay_after(attempt))
            .count() as u32;
        assert_eq!(retries, BackoffPolicy::MAX_ATTEMPTS - 1);
    }

    #[test]
    fn test_long_wait_never_below_short_wait() {
        let policy = BackoffPolicy::new(Duration::from_millis(50), Duration::from_millis(10));
        assert_eq!(policy.long_wait(), Duration::from_millis(50));
        assert_eq!(policy.remaining_long_wait(), Duration::ZERO);
    }

    #[test]
    fn test_status_from_body() {
        let body = json!({"status": {"status_code": 429, "message": "Rate limit exceeded"}});
        let status = status_from_body(&body).unwrap();
        assert_eq!(status.status_code, 429);
        assert_eq!(status.message, "Rate limit exceeded");

        assert!(status_from_body(&json!({"gameId": 1})).is_none());
        assert!(status_from_body(&json!({"status": "ok"})).is_none());
        assert!(status_from_body(&json!([1, 2, 3])).is_none());
    }

    #[test]
    fn test_is_rate_limited() {
        let limited = ApiStatus {
            status_code: 429,
            message: String::new(),
        };
        let forbidden = ApiStatus {
            status_code: 403,
            message: "Forbidden".to_string(),
        };

        assert!(is_rate_limited(429, None));
        assert!(is_rate_limited(200, Some(&limited)));
        assert!(!is_rate_limited(200, None));
        assert!(!is_rate_limited(403, Some(&forbidden)));
    }
}
