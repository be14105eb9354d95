pub mod extractor;
pub mod participants;
pub mod roster;

pub use extractor::{StatValue, Statistic, extract, extract_by_name, participant_stats};
pub use participants::{participant_id_for_champion, participant_id_for_summoner};
pub use roster::{Side, champion_roster, summoner_roster};
