use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {message} (URL: {url})")]
    ApiNotFound { message: String, url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429) after backoff: {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Argument validation errors
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid side '{0}': expected 'blue' or 'red'")]
    InvalidSide(String),

    #[error("Unsupported statistic: {0}")]
    UnsupportedStatistic(String),

    #[error("Invalid index range: {0}")]
    InvalidIndexRange(String),

    #[error("Invalid time range: begin {begin} is after end {end}")]
    InvalidTimeRange { begin: i64, end: i64 },

    #[error("Invalid id list '{0}': expected comma separated numbers")]
    InvalidIdList(String),

    // Lookups inside fetched data
    #[error("Summoner with account id {account_id} not found in match {game_id}")]
    SummonerNotInMatch { account_id: String, game_id: u64 },

    #[error("Participant {participant_id} not found in match {game_id}")]
    ParticipantNotFound { participant_id: u32, game_id: u64 },

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Champion {champion} not played in match {game_id}")]
    ChampionNotInMatch { champion: String, game_id: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNotFound {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    pub fn invalid_side(side: impl Into<String>) -> Self {
        Self::InvalidSide(side.into())
    }

    pub fn unsupported_statistic(name: impl Into<String>) -> Self {
        Self::UnsupportedStatistic(name.into())
    }

    pub fn invalid_index_range(msg: impl Into<String>) -> Self {
        Self::InvalidIndexRange(msg.into())
    }

    pub fn summoner_not_in_match(account_id: impl Into<String>, game_id: u64) -> Self {
        Self::SummonerNotInMatch {
            account_id: account_id.into(),
            game_id,
        }
    }

    pub fn participant_not_found(participant_id: u32, game_id: u64) -> Self {
        Self::ParticipantNotFound {
            participant_id,
            game_id,
        }
    }

    pub fn champion_not_found(champion: impl Into<String>) -> Self {
        Self::ChampionNotFound(champion.into())
    }

    pub fn champion_not_in_match(champion: impl Into<String>, game_id: u64) -> Self {
        Self::ChampionNotInMatch {
            champion: champion.into(),
            game_id,
        }
    }

    /// Check if error comes from a bad argument (caller mistake, never retried)
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingArgument(_)
                | AppError::InvalidSide(_)
                | AppError::UnsupportedStatistic(_)
                | AppError::InvalidIndexRange(_)
                | AppError::InvalidTimeRange { .. }
                | AppError::InvalidIdList(_)
        )
    }

    /// Check if error means the requested entity is absent from fetched data.
    /// Upstream 404s are deliberately not included.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            AppError::SummonerNotInMatch { .. }
                | AppError::ParticipantNotFound { .. }
                | AppError::ChampionNotFound(_)
                | AppError::ChampionNotInMatch { .. }
        )
    }

    /// Check if error is a failed or unusable upstream HTTP exchange
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiParse(_)
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }

    /// Check if error is the typed outcome of an exhausted rate-limit backoff
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::ApiRateLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found(
            "Data not found - summoner not found",
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/x",
        );
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): Data not found - summoner not found (URL: https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/x)"
        );
    }

    #[test]
    fn test_api_rate_limit_helper() {
        let error = AppError::api_rate_limit("Rate limit exceeded", "https://api.example.com");
        assert!(matches!(error, AppError::ApiRateLimit { .. }));
        assert_eq!(
            error.to_string(),
            "API rate limit exceeded (429) after backoff: Rate limit exceeded (URL: https://api.example.com)"
        );
        assert!(error.is_rate_limited());
    }

    #[test]
    fn test_participant_not_found_helper() {
        let error = AppError::participant_not_found(11, 4_200_000_000);
        assert_eq!(
            error.to_string(),
            "Participant 11 not found in match 4200000000"
        );
    }

    #[test]
    fn test_invalid_side_helper() {
        let error = AppError::invalid_side("green");
        assert_eq!(
            error.to_string(),
            "Invalid side 'green': expected 'blue' or 'red'"
        );
    }

    #[test]
    fn test_error_classification() {
        // Validation errors
        assert!(AppError::invalid_side("purple").is_validation_error());
        assert!(AppError::unsupported_statistic("wards").is_validation_error());
        assert!(AppError::invalid_index_range("end before begin").is_validation_error());
        assert!(AppError::missing_argument("summoner").is_validation_error());

        // Lookup errors
        assert!(AppError::summoner_not_in_match("acc", 1).is_lookup_error());
        assert!(AppError::participant_not_found(3, 1).is_lookup_error());
        assert!(AppError::champion_not_found("Zed").is_lookup_error());
        assert!(AppError::champion_not_in_match("Zed", 1).is_lookup_error());

        // Upstream errors
        assert!(AppError::api_not_found("msg", "url").is_upstream_error());
        assert!(AppError::api_rate_limit("msg", "url").is_upstream_error());
        assert!(AppError::network_timeout("url").is_upstream_error());
        assert!(AppError::api_server_error(500, "msg", "url").is_upstream_error());
    }

    #[test]
    fn test_upstream_not_found_is_not_a_lookup_error() {
        let error = AppError::api_not_found("Data not found", "url");
        assert!(!error.is_lookup_error());
        assert!(!error.is_validation_error());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::api_not_found("not found", "https://example.com"),
            AppError::api_server_error(500, "server error", "https://example.com"),
            AppError::api_client_error(403, "Forbidden", "https://example.com"),
            AppError::api_rate_limit("rate limit", "https://example.com"),
            AppError::api_service_unavailable(503, "unavailable", "https://example.com"),
            AppError::network_timeout("https://example.com"),
            AppError::network_connection("https://example.com", "connection failed"),
            AppError::api_malformed_json("bad json", "https://example.com"),
            AppError::api_unexpected_structure("bad structure", "https://example.com"),
            AppError::api_no_data("no data", "https://example.com"),
            AppError::InvalidTimeRange { begin: 10, end: 5 },
            AppError::InvalidIdList("1,a".to_string()),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
