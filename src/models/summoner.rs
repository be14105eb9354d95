use serde::{Deserialize, Serialize};

/// Summoner record from the `summoner/v4` endpoints.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Summoner {
    /// Encrypted summoner id
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(default)]
    pub puuid: Option<String>,
    pub name: String,
    #[serde(rename = "profileIconId", default)]
    pub profile_icon_id: Option<u32>,
    #[serde(rename = "summonerLevel", default)]
    pub summoner_level: Option<u32>,
}
