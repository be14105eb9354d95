//! League of Legends match statistics from the Riot API
//!
//! This library wraps the summoner and match endpoints of the Riot API behind
//! a rate-limited client, and extracts per-player statistics and team
//! rosters from fetched match documents.
//!
//! # Examples
//!
//! ```rust,no_run
//! use riot_stats::config::Config;
//! use riot_stats::error::AppError;
//! use riot_stats::riot_api::{MatchlistFilter, RiotClient};
//! use riot_stats::stats::Statistic;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = RiotClient::from_config(&config)?;
//!     let catalog = client.champion_catalog().await?;
//!
//!     let account_id = client.account_id_by_summoner("Faker").await?;
//!     let filter = MatchlistFilter::new().queues([420]).index_range_bounds(None, Some(5));
//!
//!     for summary in client.matchlist(&account_id, &filter).await? {
//!         let gold = client
//!             .stat_for_summoner(summary.game_id, "Faker", Statistic::GoldPerMin, &catalog)
//!             .await?;
//!         println!("{}: {gold}", summary.game_id);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod riot_api;
pub mod stats;
pub mod table;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::{Config, Credentials};
pub use error::AppError;
pub use models::{ChampionCatalog, MatchDocument, MatchSummary, Summoner, Timeline};
pub use riot_api::{BackoffPolicy, MatchlistFilter, RiotClient};
pub use stats::{Side, StatValue, Statistic};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
