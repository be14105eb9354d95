//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers of the Riot API contract
//! and the client's defaults so they are documented in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "riot_stats.log";

/// Fixed two-step backoff used when the API signals a rate limit
pub mod rate_limit {
    /// HTTP status (and body `status.status_code`) signalling a rate limit
    pub const STATUS_CODE: u16 = 429;

    /// Wait before the single short retry (the 1 second application window)
    pub const SHORT_WAIT_MS: u64 = 1_000;

    /// Total wait before the final attempt (the 120 second application window).
    /// The short wait already spent is subtracted from this.
    pub const LONG_WAIT_MS: u64 = 120_000;
}

/// Riot API endpoint pieces
pub mod riot {
    /// Regional hosts are `{region}.` followed by this suffix
    pub const HOST_SUFFIX: &str = "api.riotgames.com";

    pub const SUMMONER_BY_NAME: &str = "/lol/summoner/v4/summoners/by-name/";
    pub const SUMMONER_BY_ACCOUNT: &str = "/lol/summoner/v4/summoners/by-account/";
    pub const MATCHLIST_BY_ACCOUNT: &str = "/lol/match/v4/matchlists/by-account/";
    pub const MATCH_BY_ID: &str = "/lol/match/v4/matches/";
    pub const TIMELINE_BY_MATCH: &str = "/lol/match/v4/timelines/by-match/";

    /// Maximum number of matches a single matchlist request may span
    pub const MATCHLIST_MAX_SPAN: u32 = 100;
}

/// Data Dragon champion catalog feed
pub mod ddragon {
    pub const DEFAULT_DOMAIN: &str = "https://ddragon.leagueoflegends.com";
    pub const VERSIONS_PATH: &str = "/api/versions.json";
    pub const LOCALE: &str = "en_US";
}

/// Team identifiers used by the match endpoints
pub mod teams {
    pub const BLUE: u32 = 100;
    pub const RED: u32 = 200;

    /// Players per side in a standard 5v5 game
    pub const SIDE_SIZE: usize = 5;
}

/// Environment variable names
pub mod env_vars {
    /// Platform routing value, e.g. `euw1` or `na1`
    pub const REGION: &str = "RIOT_REGION";

    /// Development or production API key
    pub const API_KEY: &str = "RIOT_API_KEY";

    /// Override for the regional API host (proxies, tests)
    pub const API_DOMAIN: &str = "RIOT_API_DOMAIN";

    /// Override for the log file path
    pub const LOG_FILE: &str = "RIOT_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "RIOT_HTTP_TIMEOUT";
}
