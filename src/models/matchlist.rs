use serde::{Deserialize, Serialize};

/// One entry of a matchlist: a match the account played.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MatchSummary {
    #[serde(rename = "platformId")]
    pub platform_id: String,
    #[serde(rename = "gameId")]
    pub game_id: u64,
    /// Champion id (numeric key in the champion catalog)
    pub champion: u32,
    pub queue: u32,
    pub season: u32,
    /// Game creation time in epoch milliseconds
    pub timestamp: i64,
    pub role: String,
    pub lane: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatchlistResponse {
    pub matches: Vec<MatchSummary>,
    #[serde(rename = "startIndex", default)]
    pub start_index: u32,
    #[serde(rename = "endIndex", default)]
    pub end_index: u32,
    #[serde(rename = "totalGames", default)]
    pub total_games: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchlist_deserialization() {
        let json = r#"{
            "matches": [
                {
                    "platformId": "EUW1",
                    "gameId": 4321,
                    "champion": 157,
                    "queue": 420,
                    "season": 13,
                    "timestamp": 1580000000000,
                    "role": "SOLO",
                    "lane": "MID"
                }
            ],
            "startIndex": 0,
            "endIndex": 1,
            "totalGames": 120
        }"#;

        let response: MatchlistResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0].game_id, 4321);
        assert_eq!(response.matches[0].lane, "MID");
        assert_eq!(response.total_games, 120);
    }

    #[test]
    fn test_matchlist_entry_missing_field_is_rejected() {
        let json = r#"{"matches": [{"platformId": "EUW1", "gameId": 1}]}"#;
        assert!(serde_json::from_str::<MatchlistResponse>(json).is_err());
    }
}
