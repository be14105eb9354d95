use serde::{Deserialize, Serialize};

/// Per-participant end-of-game statistics.
///
/// Only the fields the extractor reads are required; everything else the
/// endpoint sends is optional so that older matches still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParticipantStats {
    #[serde(default)]
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(rename = "goldEarned")]
    pub gold_earned: u64,
    #[serde(rename = "totalMinionsKilled")]
    pub total_minions_killed: u64,
    #[serde(rename = "totalDamageDealt")]
    pub total_damage_dealt: u64,
    #[serde(rename = "neutralMinionsKilled", default)]
    pub neutral_minions_killed: u64,
    #[serde(rename = "totalDamageDealtToChampions", default)]
    pub total_damage_dealt_to_champions: u64,
    #[serde(rename = "visionScore", default)]
    pub vision_score: u64,
    #[serde(rename = "champLevel", default)]
    pub champ_level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    #[serde(rename = "participantId")]
    pub participant_id: u32,
    /// 100 for blue side, 200 for red side
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "championId")]
    pub champion_id: u32,
    #[serde(rename = "spell1Id", default)]
    pub spell1_id: Option<u32>,
    #[serde(rename = "spell2Id", default)]
    pub spell2_id: Option<u32>,
    pub stats: ParticipantStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    #[serde(rename = "currentAccountId")]
    pub current_account_id: String,
    #[serde(rename = "summonerName")]
    pub summoner_name: String,
    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
    #[serde(rename = "summonerId", default)]
    pub summoner_id: Option<String>,
    #[serde(rename = "currentPlatformId", default)]
    pub current_platform_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticipantIdentity {
    #[serde(rename = "participantId")]
    pub participant_id: u32,
    pub player: Player,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamStats {
    #[serde(rename = "teamId")]
    pub team_id: u32,
    /// "Win" or "Fail"
    #[serde(default)]
    pub win: Option<String>,
}

/// Full record of one completed game from `match/v4/matches/{gameId}`.
///
/// `participant_id` is unique within a document and joins `participants`
/// with `participant_identities`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchDocument {
    #[serde(rename = "gameId")]
    pub game_id: u64,
    #[serde(rename = "platformId", default)]
    pub platform_id: Option<String>,
    /// Game length in seconds
    #[serde(rename = "gameDuration")]
    pub game_duration: u64,
    #[serde(rename = "queueId", default)]
    pub queue_id: Option<u32>,
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<u32>,
    #[serde(rename = "gameMode", default)]
    pub game_mode: Option<String>,
    #[serde(rename = "gameVersion", default)]
    pub game_version: Option<String>,
    #[serde(default)]
    pub teams: Vec<TeamStats>,
    pub participants: Vec<Participant>,
    #[serde(rename = "participantIdentities")]
    pub participant_identities: Vec<ParticipantIdentity>,
}

impl MatchDocument {
    pub fn participant(&self, participant_id: u32) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| p.participant_id == participant_id)
    }

    pub fn identity(&self, participant_id: u32) -> Option<&ParticipantIdentity> {
        self.participant_identities
            .iter()
            .find(|i| i.participant_id == participant_id)
    }

    /// Game length in real-valued minutes
    pub fn minutes(&self) -> f64 {
        self.game_duration as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::sample_match_document;

    #[test]
    fn test_match_document_deserialization() {
        let json = r#"{
            "gameId": 5000,
            "platformId": "EUW1",
            "gameDuration": 1800,
            "queueId": 420,
            "teams": [{"teamId": 100, "win": "Win"}, {"teamId": 200, "win": "Fail"}],
            "participants": [
                {
                    "participantId": 1,
                    "teamId": 100,
                    "championId": 266,
                    "stats": {
                        "participantId": 1,
                        "win": true,
                        "kills": 4,
                        "deaths": 2,
                        "assists": 9,
                        "goldEarned": 9000,
                        "totalMinionsKilled": 180,
                        "totalDamageDealt": 120000
                    }
                }
            ],
            "participantIdentities": [
                {
                    "participantId": 1,
                    "player": {
                        "currentAccountId": "acc-1",
                        "summonerName": "First",
                        "profileIcon": 12
                    }
                }
            ]
        }"#;

        let document: MatchDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.game_id, 5000);
        assert_eq!(document.participants[0].stats.gold_earned, 9000);
        assert_eq!(document.participants[0].stats.neutral_minions_killed, 0);
        assert_eq!(
            document.participant_identities[0].player.summoner_name,
            "First"
        );
        assert_eq!(document.teams.len(), 2);
    }

    #[test]
    fn test_missing_stats_field_fails_fast() {
        // goldEarned missing: must not silently default to zero
        let json = r#"{
            "gameId": 1,
            "gameDuration": 60,
            "participants": [{
                "participantId": 1, "teamId": 100, "championId": 1,
                "stats": {"kills": 0, "deaths": 0, "assists": 0,
                          "totalMinionsKilled": 0, "totalDamageDealt": 0}
            }],
            "participantIdentities": []
        }"#;
        let err = serde_json::from_str::<MatchDocument>(json).unwrap_err();
        assert!(err.to_string().contains("goldEarned"));
    }

    #[test]
    fn test_participant_and_identity_lookup() {
        let document = sample_match_document();
        assert_eq!(document.participant(3).unwrap().participant_id, 3);
        assert_eq!(
            document.identity(7).unwrap().player.summoner_name,
            "Red Two"
        );
        assert!(document.participant(11).is_none());
        assert!(document.identity(0).is_none());
    }

    #[test]
    fn test_minutes_is_real_valued() {
        let mut document = sample_match_document();
        document.game_duration = 1650;
        assert_eq!(document.minutes(), 27.5);
    }
}
