//! Raw stat rows and their mapping into typed records.

use hoops_core::models::{BoxScoreLine, EntityCounts, PlayerGameStats, PlayerSeasonStats, StatsLeader};
use hoops_core::StoreError;
use rust_decimal::Decimal;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerGameStatsRow {
    pub id: i32,
    pub player_id: i32,
    pub game_id: i32,
    pub team_id: i32,
    pub minutes_played: Option<i32>,
    pub points: Option<i32>,
    pub rebounds: Option<i32>,
    pub assists: Option<i32>,
    pub steals: Option<i32>,
    pub blocks: Option<i32>,
    pub turnovers: Option<i32>,
    pub field_goals_made: Option<i32>,
    pub field_goals_attempted: Option<i32>,
    pub three_pointers_made: Option<i32>,
    pub three_pointers_attempted: Option<i32>,
    pub free_throws_made: Option<i32>,
    pub free_throws_attempted: Option<i32>,
}

impl From<PlayerGameStatsRow> for PlayerGameStats {
    // A NULL counting stat means the scorer recorded none.
    fn from(row: PlayerGameStatsRow) -> Self {
        PlayerGameStats {
            id: row.id,
            player_id: row.player_id,
            game_id: row.game_id,
            team_id: row.team_id,
            minutes_played: row.minutes_played.unwrap_or(0),
            points: row.points.unwrap_or(0),
            rebounds: row.rebounds.unwrap_or(0),
            assists: row.assists.unwrap_or(0),
            steals: row.steals.unwrap_or(0),
            blocks: row.blocks.unwrap_or(0),
            turnovers: row.turnovers.unwrap_or(0),
            field_goals_made: row.field_goals_made.unwrap_or(0),
            field_goals_attempted: row.field_goals_attempted.unwrap_or(0),
            three_pointers_made: row.three_pointers_made.unwrap_or(0),
            three_pointers_attempted: row.three_pointers_attempted.unwrap_or(0),
            free_throws_made: row.free_throws_made.unwrap_or(0),
            free_throws_attempted: row.free_throws_attempted.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BoxScoreLineRow {
    #[sqlx(flatten)]
    pub stats: PlayerGameStatsRow,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

impl TryFrom<BoxScoreLineRow> for BoxScoreLine {
    type Error = StoreError;

    fn try_from(row: BoxScoreLineRow) -> Result<Self, Self::Error> {
        Ok(BoxScoreLine {
            stats: row.stats.into(),
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position.parse()?,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerSeasonStatsRow {
    pub player_id: i32,
    pub season: String,
    pub team_id: Option<i32>,
    pub games_played: Option<i32>,
    pub avg_points: Option<Decimal>,
    pub avg_rebounds: Option<Decimal>,
    pub avg_assists: Option<Decimal>,
    pub avg_steals: Option<Decimal>,
    pub avg_blocks: Option<Decimal>,
    pub field_goal_percentage: Option<Decimal>,
    pub three_point_percentage: Option<Decimal>,
    pub free_throw_percentage: Option<Decimal>,
}

impl From<PlayerSeasonStatsRow> for PlayerSeasonStats {
    // Percentages are NULL when a player has no attempts.
    fn from(row: PlayerSeasonStatsRow) -> Self {
        PlayerSeasonStats {
            player_id: row.player_id,
            season: row.season,
            team_id: row.team_id,
            games_played: row.games_played.unwrap_or(0),
            avg_points: row.avg_points.unwrap_or(Decimal::ZERO),
            avg_rebounds: row.avg_rebounds.unwrap_or(Decimal::ZERO),
            avg_assists: row.avg_assists.unwrap_or(Decimal::ZERO),
            avg_steals: row.avg_steals.unwrap_or(Decimal::ZERO),
            avg_blocks: row.avg_blocks.unwrap_or(Decimal::ZERO),
            field_goal_percentage: row.field_goal_percentage.unwrap_or(Decimal::ZERO),
            three_point_percentage: row.three_point_percentage.unwrap_or(Decimal::ZERO),
            free_throw_percentage: row.free_throw_percentage.unwrap_or(Decimal::ZERO),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StatsLeaderRow {
    pub player_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub team_name: Option<String>,
    pub value: Option<Decimal>,
}

impl From<StatsLeaderRow> for StatsLeader {
    fn from(row: StatsLeaderRow) -> Self {
        StatsLeader {
            player_id: row.player_id,
            first_name: row.first_name,
            last_name: row.last_name,
            team_name: row.team_name,
            value: row.value.unwrap_or(Decimal::ZERO),
        }
    }
}

#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct EntityCountsRow {
    pub teams: i64,
    pub players: i64,
    pub games: i64,
}

impl From<EntityCountsRow> for EntityCounts {
    fn from(row: EntityCountsRow) -> Self {
        EntityCounts {
            teams: row.teams,
            players: row.players,
            games: row.games,
        }
    }
}
