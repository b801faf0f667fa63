//! Per-game stat lines, season aggregates, and leaderboards.
//!
//! Every aggregate here is read from the store as-is. Nothing in this module
//! recomputes an average or a percentage.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;
use crate::models::Position;

/// One player's line in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameStats {
    pub id: i32,
    pub player_id: i32,
    pub game_id: i32,
    pub team_id: i32,
    pub minutes_played: i32,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub turnovers: i32,
    pub field_goals_made: i32,
    pub field_goals_attempted: i32,
    pub three_pointers_made: i32,
    pub three_pointers_attempted: i32,
    pub free_throws_made: i32,
    pub free_throws_attempted: i32,
}

/// A box score line with the player's name and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreLine {
    #[serde(flatten)]
    pub stats: PlayerGameStats,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
}

/// Returns the stat id of the highest scorer in `lines`.
///
/// Ties go to the line that appears first.
#[must_use]
pub fn top_scorer(lines: &[BoxScoreLine]) -> Option<i32> {
    let mut best: Option<&BoxScoreLine> = None;
    for line in lines {
        match best {
            Some(current) if line.stats.points <= current.stats.points => {}
            _ => best = Some(line),
        }
    }
    best.map(|line| line.stats.id)
}

/// Precomputed per-player season aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonStats {
    pub player_id: i32,
    pub season: String,
    pub team_id: Option<i32>,
    pub games_played: i32,
    pub avg_points: Decimal,
    pub avg_rebounds: Decimal,
    pub avg_assists: Decimal,
    pub avg_steals: Decimal,
    pub avg_blocks: Decimal,
    /// Fraction in [0, 1].
    pub field_goal_percentage: Decimal,
    pub three_point_percentage: Decimal,
    pub free_throw_percentage: Decimal,
}

/// Season average a leaderboard ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderStat {
    Points,
    Rebounds,
    Assists,
}

impl LeaderStat {
    pub const ALL: [LeaderStat; 3] = [LeaderStat::Points, LeaderStat::Rebounds, LeaderStat::Assists];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderStat::Points => "points",
            LeaderStat::Rebounds => "rebounds",
            LeaderStat::Assists => "assists",
        }
    }

    /// Per-game unit shown next to the value.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            LeaderStat::Points => "PPG",
            LeaderStat::Rebounds => "RPG",
            LeaderStat::Assists => "APG",
        }
    }
}

impl FromStr for LeaderStat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "points" => Ok(LeaderStat::Points),
            "rebounds" => Ok(LeaderStat::Rebounds),
            "assists" => Ok(LeaderStat::Assists),
            _ => Err(UnknownVariant::new("leader stat", s)),
        }
    }
}

impl fmt::Display for LeaderStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsLeader {
    pub player_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub team_name: Option<String>,
    pub value: Decimal,
}

/// Row totals shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    pub teams: i64,
    pub players: i64,
    pub games: i64,
}
