//! Team rosters of a match

use std::fmt;

use crate::constants::teams;
use crate::error::AppError;
use crate::models::{ChampionCatalog, MatchDocument};

/// One of the two teams of a Summoner's Rift match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    /// Parses an optional side argument.
    ///
    /// `None` and `""` mean both sides. Otherwise only `"blue"` and `"red"`
    /// are accepted.
    pub fn parse(side: Option<&str>) -> Result<Option<Side>, AppError> {
        match side {
            None | Some("") => Ok(None),
            Some("blue") => Ok(Some(Side::Blue)),
            Some("red") => Ok(Some(Side::Red)),
            Some(other) => Err(AppError::invalid_side(other)),
        }
    }

    /// `teamId` the API uses for this side
    pub fn team_id(self) -> u32 {
        match self {
            Side::Blue => teams::BLUE,
            Side::Red => teams::RED,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Blue => f.write_str("blue"),
            Side::Red => f.write_str("red"),
        }
    }
}

/// Champion names of one side, or of the whole match, in participant order.
///
/// Sides are selected by each participant's `teamId`.
///
/// # Errors
/// `ChampionNotFound` when a played champion is missing from `catalog`.
pub fn champion_roster(
    document: &MatchDocument,
    side: Option<Side>,
    catalog: &ChampionCatalog,
) -> Result<Vec<String>, AppError> {
    document
        .participants
        .iter()
        .filter(|participant| side.is_none_or(|s| participant.team_id == s.team_id()))
        .map(|participant| {
            catalog
                .name_for_id(participant.champion_id)
                .map(str::to_string)
                .ok_or_else(|| AppError::champion_not_found(participant.champion_id.to_string()))
        })
        .collect()
}

/// Summoner names of one side, or of the whole match.
///
/// Identities carry no team id, so sides are taken by position: the first
/// five identities are blue and the rest red. This matches the order the
/// match endpoint returns for standard 5v5 games.
pub fn summoner_roster(document: &MatchDocument, side: Option<Side>) -> Vec<String> {
    let names = document
        .participant_identities
        .iter()
        .map(|identity| identity.player.summoner_name.clone());

    match side {
        None => names.collect(),
        Some(Side::Blue) => names.take(teams::SIDE_SIZE).collect(),
        Some(Side::Red) => names.skip(teams::SIDE_SIZE).collect(),
    }
}
