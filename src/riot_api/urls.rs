//! URL building utilities for API endpoints

use crate::constants::{ddragon, riot};

/// Builds the regional API host for a platform routing value.
///
/// # Example
/// ```
/// use riot_stats::riot_api::regional_base_url;
///
/// assert_eq!(regional_base_url("EUW1"), "https://euw1.api.riotgames.com");
/// ```
pub fn regional_base_url(region: &str) -> String {
    format!("https://{}.{}", region.to_lowercase(), riot::HOST_SUFFIX)
}

/// Appends the API key to `base_url + path`.
///
/// A path that already ends in `?` or `&` gets `api_key=...` appended
/// directly, anything else gets `?api_key=...`.
///
/// # Example
/// ```
/// use riot_stats::riot_api::build_api_url;
///
/// let url = build_api_url("https://na1.api.riotgames.com", "/lol/match/v4/matches/1", "KEY");
/// assert_eq!(url, "https://na1.api.riotgames.com/lol/match/v4/matches/1?api_key=KEY");
///
/// let url = build_api_url("https://na1.api.riotgames.com", "/x?queue=420&", "KEY");
/// assert_eq!(url, "https://na1.api.riotgames.com/x?queue=420&api_key=KEY");
/// ```
pub fn build_api_url(base_url: &str, path: &str, api_key: &str) -> String {
    if path.ends_with('?') || path.ends_with('&') {
        format!("{base_url}{path}api_key={api_key}")
    } else {
        format!("{base_url}{path}?api_key={api_key}")
    }
}

/// URL safe to put in logs and errors: the request URL without the key.
pub fn display_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{}", path.trim_end_matches(['?', '&']))
}

pub fn summoner_by_name_path(summoner_name: &str) -> String {
    format!(
        "{}{}",
        riot::SUMMONER_BY_NAME,
        urlencoding::encode(summoner_name)
    )
}

pub fn summoner_by_account_path(account_id: &str) -> String {
    format!(
        "{}{}",
        riot::SUMMONER_BY_ACCOUNT,
        urlencoding::encode(account_id)
    )
}

pub fn match_path(game_id: u64) -> String {
    format!("{}{game_id}", riot::MATCH_BY_ID)
}

pub fn timeline_path(game_id: u64) -> String {
    format!("{}{game_id}", riot::TIMELINE_BY_MATCH)
}

pub fn ddragon_versions_url(ddragon_base: &str) -> String {
    format!("{ddragon_base}{}", ddragon::VERSIONS_PATH)
}

pub fn ddragon_champion_url(ddragon_base: &str, version: &str) -> String {
    format!(
        "{ddragon_base}/cdn/{version}/data/{}/champion.json",
        ddragon::LOCALE
    )
}
