//! Named statistics over a fetched match document

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::{ChampionCatalog, MatchDocument, ParticipantStats};

/// A statistic that can be extracted for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Kills,
    Deaths,
    Assists,
    /// `goldEarned`
    TotalGold,
    GoldPerMin,
    /// `totalMinionsKilled`
    Cs,
    CsPerMin,
    /// `totalDamageDealt`
    Damage,
    DamagePerMin,
    /// `"kills/deaths/assists"`
    Kdr,
    /// Champion display name
    Champion,
}

impl Statistic {
    pub const ALL: [Statistic; 11] = [
        Statistic::Kills,
        Statistic::Deaths,
        Statistic::Assists,
        Statistic::TotalGold,
        Statistic::GoldPerMin,
        Statistic::Cs,
        Statistic::CsPerMin,
        Statistic::Damage,
        Statistic::DamagePerMin,
        Statistic::Kdr,
        Statistic::Champion,
    ];

    /// Name used on the command line and in `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Statistic::Kills => "kills",
            Statistic::Deaths => "deaths",
            Statistic::Assists => "assists",
            Statistic::TotalGold => "totalGold",
            Statistic::GoldPerMin => "goldPerMin",
            Statistic::Cs => "cs",
            Statistic::CsPerMin => "csPerMin",
            Statistic::Damage => "damage",
            Statistic::DamagePerMin => "damagePerMin",
            Statistic::Kdr => "kdr",
            Statistic::Champion => "champion",
        }
    }
}

impl FromStr for Statistic {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statistic::ALL
            .into_iter()
            .find(|statistic| statistic.name() == s)
            .ok_or_else(|| AppError::unsupported_statistic(s))
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of an extracted statistic.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Integer(value) => Some(*value as f64),
            StatValue::Float(value) => Some(*value),
            StatValue::Text(_) => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(value) => write!(f, "{value}"),
            StatValue::Float(value) => write!(f, "{value}"),
            StatValue::Text(value) => f.write_str(value),
        }
    }
}

/// Stats block of the participant with `participant_id`.
pub fn participant_stats(
    document: &MatchDocument,
    participant_id: u32,
) -> Result<&ParticipantStats, AppError> {
    document
        .participant(participant_id)
        .map(|p| &p.stats)
        .ok_or_else(|| AppError::participant_not_found(participant_id, document.game_id))
}

/// Computes `statistic` for one participant of `document`.
///
/// Per-minute values divide by real-valued minutes (`gameDuration / 60`).
///
/// # Errors
/// - `ParticipantNotFound` when no participant has `participant_id`
/// - `ChampionNotFound` when `Champion` is asked for an id missing from `catalog`
/// - `ApiUnexpectedStructure` for a per-minute value of a zero-length game
pub fn extract(
    document: &MatchDocument,
    participant_id: u32,
    statistic: Statistic,
    catalog: &ChampionCatalog,
) -> Result<StatValue, AppError> {
    let stats = participant_stats(document, participant_id)?;

    let value = match statistic {
        Statistic::Kills => StatValue::Integer(stats.kills.into()),
        Statistic::Deaths => StatValue::Integer(stats.deaths.into()),
        Statistic::Assists => StatValue::Integer(stats.assists.into()),
        Statistic::TotalGold => StatValue::Integer(stats.gold_earned),
        Statistic::Cs => StatValue::Integer(stats.total_minions_killed),
        Statistic::Damage => StatValue::Integer(stats.total_damage_dealt),
        Statistic::GoldPerMin => StatValue::Float(per_minute(document, stats.gold_earned)?),
        Statistic::CsPerMin => {
            StatValue::Float(per_minute(document, stats.total_minions_killed)?)
        }
        Statistic::DamagePerMin => {
            StatValue::Float(per_minute(document, stats.total_damage_dealt)?)
        }
        Statistic::Kdr => StatValue::Text(format!(
            "{}/{}/{}",
            stats.kills, stats.deaths, stats.assists
        )),
        Statistic::Champion => {
            // participant_stats already proved the participant exists
            let champion_id = document
                .participant(participant_id)
                .map(|p| p.champion_id)
                .unwrap_or_default();
            let name = catalog
                .name_for_id(champion_id)
                .ok_or_else(|| AppError::champion_not_found(champion_id.to_string()))?;
            StatValue::Text(name.to_string())
        }
    };

    Ok(value)
}

/// Parses `statistic_name` and extracts it.
pub fn extract_by_name(
    document: &MatchDocument,
    participant_id: u32,
    statistic_name: &str,
    catalog: &ChampionCatalog,
) -> Result<StatValue, AppError> {
    let statistic: Statistic = statistic_name.parse()?;
    extract(document, participant_id, statistic, catalog)
}

fn per_minute(document: &MatchDocument, total: u64) -> Result<f64, AppError> {
    if document.game_duration == 0 {
        return Err(AppError::api_unexpected_structure(
            "gameDuration is zero, per-minute statistics are undefined",
            format!("match {}", document.game_id),
        ));
    }
    Ok(total as f64 / document.minutes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{sample_champion_catalog, sample_match_document};

    #[test]
    fn test_statistic_names_roundtrip() {
        for statistic in Statistic::ALL {
            assert_eq!(statistic.name().parse::<Statistic>().unwrap(), statistic);
            assert_eq!(statistic.to_string(), statistic.name());
        }
    }

    #[test]
    fn test_unsupported_statistic_name() {
        let err = "wardsPlaced".parse::<Statistic>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedStatistic(ref name) if name == "wardsPlaced"));

        // Names are case sensitive
        assert!("Kills".parse::<Statistic>().is_err());
    }

    #[test]
    fn test_direct_field_reads() {
        let document = sample_match_document();
        let catalog = sample_champion_catalog();
        let stats = &document.participant(4).unwrap().stats;

        let cases = [
            (Statistic::Kills, u64::from(stats.kills)),
            (Statistic::Deaths, u64::from(stats.deaths)),
            (Statistic::Assists, u64::from(stats.assists)),
            (Statistic::TotalGold, stats.gold_earned),
            (Statistic::Cs, stats.total_minions_killed),
            (Statistic::Damage, stats.total_damage_dealt),
        ];
        for (statistic, expected) in cases {
            assert_eq!(
                extract(&document, 4, statistic, &catalog).unwrap(),
                StatValue::Integer(expected),
                "{statistic}"
            );
        }
    }

    #[test]
    fn test_gold_per_min_thirty_minute_game() {
        let document = sample_match_document();
        let catalog = sample_champion_catalog();
        assert_eq!(document.game_duration, 1800);
        assert_eq!(document.participant(1).unwrap().stats.gold_earned, 9000);

        let value = extract(&document, 1, Statistic::GoldPerMin, &catalog).unwrap();
        assert_eq!(value, StatValue::Float(300.0));
        assert_eq!(value.to_string(), "300");
    }

    #[test]
    fn test_per_minute_uses_real_valued_minutes() {
        let mut document = sample_match_document();
        document.game_duration = 1650; // 27.5 minutes
        let catalog = sample_champion_catalog();
        let stats = document.participant(2).unwrap().stats.clone();

        let cs = extract(&document, 2, Statistic::CsPerMin, &catalog).unwrap();
        assert_eq!(cs, StatValue::Float(stats.total_minions_killed as f64 / 27.5));

        let damage = extract(&document, 2, Statistic::DamagePerMin, &catalog).unwrap();
        assert_eq!(
            damage,
            StatValue::Float(stats.total_damage_dealt as f64 / 27.5)
        );
    }

    #[test]
    fn test_per_minute_zero_duration() {
        let mut document = sample_match_document();
        document.game_duration = 0;
        let catalog = sample_champion_catalog();
        let err = extract(&document, 1, Statistic::GoldPerMin, &catalog).unwrap_err();
        assert!(matches!(err, AppError::ApiUnexpectedStructure { .. }));

        // Non per-minute values still work
        assert!(extract(&document, 1, Statistic::Kills, &catalog).is_ok());
    }

    #[test]
    fn test_kdr_is_formatted_string() {
        let document = sample_match_document();
        let catalog = sample_champion_catalog();
        // participant 3: kills 3, deaths 3 % 4 = 3, assists 6
        assert_eq!(
            extract(&document, 3, Statistic::Kdr, &catalog).unwrap(),
            StatValue::Text("3/3/6".to_string())
        );
    }

    #[test]
    fn test_champion_resolves_display_name() {
        let document = sample_match_document();
        let catalog = sample_champion_catalog();
        assert_eq!(
            extract(&document, 9, Statistic::Champion, &catalog).unwrap(),
            StatValue::Text("Aurelion Sol".to_string())
        );
    }

    #[test]
    fn test_champion_missing_from_catalog() {
        let document = sample_match_document();
        let catalog = ChampionCatalog::new("10.25.1", vec![]);
        let err = extract(&document, 1, Statistic::Champion, &catalog).unwrap_err();
        assert!(matches!(err, AppError::ChampionNotFound(ref id) if id == "266"));
    }

    #[test]
    fn test_participant_not_found() {
        let document = sample_match_document();
        let catalog = sample_champion_catalog();
        let err = extract(&document, 11, Statistic::Kills, &catalog).unwrap_err();
        assert!(matches!(
            err,
            AppError::ParticipantNotFound {
                participant_id: 11,
                ..
            }
        ));
        assert!(err.is_lookup_error());
    }

    #[test]
    fn test_extract_by_name() {
        let document = sample_match_document();
        let catalog = sample_champion_catalog();
        assert_eq!(
            extract_by_name(&document, 1, "kills", &catalog).unwrap(),
            StatValue::Integer(1)
        );
        let err = extract_by_name(&document, 1, "Statistic is invalid!", &catalog).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_stat_value_as_f64() {
        assert_eq!(StatValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(StatValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(StatValue::Text("1/2/3".into()).as_f64(), None);
    }
}
