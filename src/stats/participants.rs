//! Locating a participant inside a match document

use tracing::debug;

use crate::error::AppError;
use crate::models::{ChampionCatalog, MatchDocument};

/// Participant id of the player whose `currentAccountId` equals `account_id`.
///
/// Returns the first matching identity; a well formed match has at most one.
pub fn participant_id_for_summoner(
    document: &MatchDocument,
    account_id: &str,
) -> Result<u32, AppError> {
    document
        .participant_identities
        .iter()
        .find(|identity| identity.player.current_account_id == account_id)
        .map(|identity| identity.participant_id)
        .ok_or_else(|| AppError::summoner_not_in_match(account_id, document.game_id))
}

/// Participant id of whoever played `champion_name` in `document`.
///
/// # Errors
/// - `ChampionNotFound` when the name is not in `catalog`
/// - `ChampionNotInMatch` when nobody played that champion
pub fn participant_id_for_champion(
    document: &MatchDocument,
    champion_name: &str,
    catalog: &ChampionCatalog,
) -> Result<u32, AppError> {
    let champion_id = catalog
        .id_for_name(champion_name)
        .ok_or_else(|| AppError::champion_not_found(champion_name))?;
    debug!("Champion {champion_name} has id {champion_id}");

    document
        .participants
        .iter()
        .find(|participant| participant.champion_id == champion_id)
        .map(|participant| participant.participant_id)
        .ok_or_else(|| AppError::champion_not_in_match(champion_name, document.game_id))
}
