//! Riot API access: the rate-limited GET, URL building and the typed client

pub mod champions;
pub mod client;
pub mod fetch_utils;
pub mod http_client;
pub mod matchlist_filter;
pub mod rate_limit;
pub mod urls;

pub use champions::{fetch_champion_catalog, latest_version};
pub use client::RiotClient;
pub use fetch_utils::{call, call_as, fetch_public};
pub use http_client::create_http_client_with_timeout;
pub use matchlist_filter::{MatchlistFilter, build_matchlist_path, parse_id_list};
pub use rate_limit::{ApiStatus, BackoffPolicy, is_rate_limited, status_from_body};
pub use urls::{build_api_url, display_url, regional_base_url};
