//! Fixtures shared by unit and integration tests.

use crate::constants::teams;
use crate::models::{
    ChampionCatalog, ChampionInfo, MatchDocument, MatchSummary, Participant, ParticipantIdentity,
    ParticipantStats, Player, TeamStats,
};

/// Champion ids used by the sample match, in participant order
pub const SAMPLE_CHAMPION_IDS: [u32; 10] = [266, 103, 84, 12, 32, 34, 1, 22, 136, 268];

/// Summoner names used by the sample match, in participant order
pub const SAMPLE_SUMMONER_NAMES: [&str; 10] = [
    "Blue One", "Blue Two", "Blue Three", "Blue Four", "Blue Five", "Red One", "Red Two",
    "Red Three", "Red Four", "Red Five",
];

/// Test utilities for creating mock match data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a participant with the given stat line
    pub fn participant(
        participant_id: u32,
        team_id: u32,
        champion_id: u32,
        stats: ParticipantStats,
    ) -> Participant {
        Participant {
            participant_id,
            team_id,
            champion_id,
            spell1_id: Some(4),
            spell2_id: Some(14),
            stats,
        }
    }

    pub fn stats(kills: u32, deaths: u32, assists: u32, gold: u64, cs: u64, damage: u64) -> ParticipantStats {
        ParticipantStats {
            kills,
            deaths,
            assists,
            gold_earned: gold,
            total_minions_killed: cs,
            total_damage_dealt: damage,
            ..ParticipantStats::default()
        }
    }

    pub fn identity(participant_id: u32, account_id: &str, summoner_name: &str) -> ParticipantIdentity {
        ParticipantIdentity {
            participant_id,
            player: Player {
                current_account_id: account_id.to_string(),
                summoner_name: summoner_name.to_string(),
                account_id: Some(account_id.to_string()),
                summoner_id: None,
                current_platform_id: Some("EUW1".to_string()),
            },
        }
    }

    pub fn champion(key: u32, id: &str, name: &str) -> ChampionInfo {
        ChampionInfo {
            id: id.to_string(),
            key: key.to_string(),
            name: name.to_string(),
            title: String::new(),
            tags: vec![],
        }
    }

    pub fn match_summary(game_id: u64, champion: u32, timestamp: i64) -> MatchSummary {
        MatchSummary {
            platform_id: "EUW1".to_string(),
            game_id,
            champion,
            queue: 420,
            season: 13,
            timestamp,
            role: "SOLO".to_string(),
            lane: "MID".to_string(),
        }
    }
}

/// Standard 5v5 match, 30 minutes long.
///
/// Participant `i` (1..=10) plays on blue for 1-5 and red for 6-10, has
/// account id `acc-{i}`, and earned `8500 + 500 * i` gold, `150 + 30 * i` CS
/// and `100000 + 20000 * i` damage with a `i / (i % 4) / 2i` scoreline.
/// Participant 1 therefore has 9000 gold.
pub fn sample_match_document() -> MatchDocument {
    let participants = (1..=10u32)
        .map(|i| {
            let team = if i <= 5 { teams::BLUE } else { teams::RED };
            let stats = TestDataBuilder::stats(
                i,
                i % 4,
                2 * i,
                8500 + 500 * u64::from(i),
                150 + 30 * u64::from(i),
                100_000 + 20_000 * u64::from(i),
            );
            TestDataBuilder::participant(i, team, SAMPLE_CHAMPION_IDS[(i - 1) as usize], stats)
        })
        .collect();

    let participant_identities = (1..=10u32)
        .map(|i| {
            TestDataBuilder::identity(
                i,
                &format!("acc-{i}"),
                SAMPLE_SUMMONER_NAMES[(i - 1) as usize],
            )
        })
        .collect();

    MatchDocument {
        game_id: 4_242_424_242,
        platform_id: Some("EUW1".to_string()),
        game_duration: 1800,
        queue_id: Some(420),
        season_id: Some(13),
        game_mode: Some("CLASSIC".to_string()),
        game_version: Some("10.25.348.1797".to_string()),
        teams: vec![
            TeamStats {
                team_id: teams::BLUE,
                win: Some("Win".to_string()),
            },
            TeamStats {
                team_id: teams::RED,
                win: Some("Fail".to_string()),
            },
        ],
        participants,
        participant_identities,
    }
}

/// Catalog covering every champion of [`sample_match_document`] plus Wukong,
/// who does not appear in the match.
pub fn sample_champion_catalog() -> ChampionCatalog {
    ChampionCatalog::new(
        "10.25.1",
        vec![
            TestDataBuilder::champion(266, "Aatrox", "Aatrox"),
            TestDataBuilder::champion(103, "Ahri", "Ahri"),
            TestDataBuilder::champion(84, "Akali", "Akali"),
            TestDataBuilder::champion(12, "Alistar", "Alistar"),
            TestDataBuilder::champion(32, "Amumu", "Amumu"),
            TestDataBuilder::champion(34, "Anivia", "Anivia"),
            TestDataBuilder::champion(1, "Annie", "Annie"),
            TestDataBuilder::champion(22, "Ashe", "Ashe"),
            TestDataBuilder::champion(136, "AurelionSol", "Aurelion Sol"),
            TestDataBuilder::champion(268, "Azir", "Azir"),
            TestDataBuilder::champion(62, "MonkeyKing", "Wukong"),
        ],
    )
}
