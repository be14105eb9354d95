pub mod champion;
pub mod match_document;
pub mod matchlist;
pub mod summoner;
pub mod timeline;

pub use champion::{ChampionCatalog, ChampionDataResponse, ChampionInfo};
pub use match_document::{
    MatchDocument, Participant, ParticipantIdentity, ParticipantStats, Player, TeamStats,
};
pub use matchlist::{MatchSummary, MatchlistResponse};
pub use summoner::Summoner;
pub use timeline::Timeline;
