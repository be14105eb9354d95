//! Credential-bound facade over the Riot API endpoints

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::champions::fetch_champion_catalog;
use super::fetch_utils::{call, call_as};
use super::http_client::create_http_client_with_timeout;
use super::matchlist_filter::{MatchlistFilter, build_matchlist_path};
use super::rate_limit::BackoffPolicy;
use super::urls::{
    match_path, regional_base_url, summoner_by_account_path, summoner_by_name_path, timeline_path,
};
use crate::config::{Config, Credentials};
use crate::constants::ddragon;
use crate::error::AppError;
use crate::models::{ChampionCatalog, MatchDocument, MatchlistResponse, MatchSummary, Summoner, Timeline};
use crate::stats::{
    StatValue, Statistic, extract, participant_id_for_champion, participant_id_for_summoner,
};

/// Riot API client bound to one set of credentials.
///
/// Holds a shared `reqwest::Client`, so cloning is cheap. Every request goes
/// through [`call`] and therefore through the rate-limit backoff.
#[derive(Debug, Clone)]
pub struct RiotClient {
    http: Client,
    base_url: String,
    ddragon_url: String,
    credentials: Credentials,
    backoff: BackoffPolicy,
}

impl RiotClient {
    /// Client for the regional host of `credentials` with the default backoff.
    pub fn new(http: Client, credentials: Credentials) -> Self {
        Self {
            http,
            base_url: regional_base_url(credentials.region()),
            ddragon_url: ddragon::DEFAULT_DOMAIN.to_string(),
            credentials,
            backoff: BackoffPolicy::default(),
        }
    }

    /// Client with the hosts, timeout and backoff of `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(http, config.credentials())
            .with_base_url(config.api_base_url())
            .with_ddragon_url(config.ddragon_base_url())
            .with_backoff(config.backoff_policy()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_ddragon_url(mut self, ddragon_url: impl Into<String>) -> Self {
        self.ddragon_url = ddragon_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw rate-limited GET of `path` on the regional host.
    pub async fn call(&self, path: &str) -> Result<Value, AppError> {
        call(
            &self.http,
            &self.base_url,
            path,
            self.credentials.api_key(),
            &self.backoff,
        )
        .await
    }

    async fn call_as<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        call_as(
            &self.http,
            &self.base_url,
            path,
            self.credentials.api_key(),
            &self.backoff,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn summoner_by_name(&self, summoner_name: &str) -> Result<Summoner, AppError> {
        require("summoner name", summoner_name)?;
        self.call_as(&summoner_by_name_path(summoner_name)).await
    }

    /// Encrypted account id of the summoner called `summoner_name`.
    pub async fn account_id_by_summoner(&self, summoner_name: &str) -> Result<String, AppError> {
        let summoner = self.summoner_by_name(summoner_name).await?;
        debug!("Summoner {} has account id {}", summoner.name, summoner.account_id);
        Ok(summoner.account_id)
    }

    #[instrument(skip(self))]
    pub async fn summoner_by_account(&self, account_id: &str) -> Result<Summoner, AppError> {
        require("account id", account_id)?;
        self.call_as(&summoner_by_account_path(account_id)).await
    }

    /// Current summoner name of the account.
    pub async fn summoner_name_by_account(&self, account_id: &str) -> Result<String, AppError> {
        Ok(self.summoner_by_account(account_id).await?.name)
    }

    /// Matches of an account, newest first, narrowed by `filter`.
    ///
    /// The filter is validated before anything is sent.
    #[instrument(skip(self))]
    pub async fn matchlist(
        &self,
        account_id: &str,
        filter: &MatchlistFilter,
    ) -> Result<Vec<MatchSummary>, AppError> {
        let path = build_matchlist_path(account_id, filter)?;
        let response: MatchlistResponse = self.call_as(&path).await?;
        info!(
            "Matchlist for {} returned {} matches",
            account_id,
            response.matches.len()
        );
        Ok(response.matches)
    }

    #[instrument(skip(self))]
    pub async fn match_by_id(&self, game_id: u64) -> Result<MatchDocument, AppError> {
        self.call_as(&match_path(game_id)).await
    }

    #[instrument(skip(self))]
    pub async fn timeline_by_id(&self, game_id: u64) -> Result<Timeline, AppError> {
        self.call_as(&timeline_path(game_id)).await
    }

    /// Champion catalog of the newest Data Dragon release.
    pub async fn champion_catalog(&self) -> Result<ChampionCatalog, AppError> {
        fetch_champion_catalog(&self.http, &self.ddragon_url).await
    }

    /// `statistic` for the named summoner in match `game_id`.
    ///
    /// Resolves the account id first, then fetches the match.
    pub async fn stat_for_summoner(
        &self,
        game_id: u64,
        summoner_name: &str,
        statistic: Statistic,
        catalog: &ChampionCatalog,
    ) -> Result<StatValue, AppError> {
        let account_id = self.account_id_by_summoner(summoner_name).await?;
        let document = self.match_by_id(game_id).await?;
        let participant_id = participant_id_for_summoner(&document, &account_id)?;
        extract(&document, participant_id, statistic, catalog)
    }

    /// `statistic` for whoever played `champion_name` in match `game_id`.
    pub async fn stat_for_champion(
        &self,
        game_id: u64,
        champion_name: &str,
        statistic: Statistic,
        catalog: &ChampionCatalog,
    ) -> Result<StatValue, AppError> {
        require("champion name", champion_name)?;
        let document = self.match_by_id(game_id).await?;
        let participant_id = participant_id_for_champion(&document, champion_name, catalog)?;
        extract(&document, participant_id, statistic, catalog)
    }
}

fn require(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::missing_argument(name));
    }
    Ok(())
}
