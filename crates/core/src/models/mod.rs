//! Typed records for every entity the service reads.
//!
//! Records are plain data. Shaping raw store rows into these types happens
//! at the store boundary in `hoops-data`.

pub mod game;
pub mod player;
pub mod stats;
pub mod team;
pub mod transaction;

pub use game::{Game, GameType, GameWithTeams, TeamResult};
pub use player::{Player, PlayerWithTeam, Position};
pub use stats::{
    top_scorer, BoxScoreLine, EntityCounts, LeaderStat, PlayerGameStats, PlayerSeasonStats,
    StatsLeader,
};
pub use team::{Conference, Team, TeamSeasonStats, TeamStanding, TeamWithStats};
pub use transaction::{PlayerTransaction, TransactionType};
