//! Raw team rows and their mapping into typed records.

use hoops_core::models::{Team, TeamSeasonStats, TeamStanding, TeamWithStats};
use hoops_core::StoreError;
use rust_decimal::Decimal;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamRow {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub conference: String,
    pub division: Option<String>,
    pub founded_year: Option<i32>,
}

impl TryFrom<TeamRow> for Team {
    type Error = StoreError;

    fn try_from(row: TeamRow) -> Result<Self, Self::Error> {
        Ok(Team {
            id: row.id,
            name: row.name,
            city: row.city,
            conference: row.conference.parse()?,
            division: row.division.unwrap_or_default(),
            founded_year: row.founded_year.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamWithStatsRow {
    #[sqlx(flatten)]
    pub team: TeamRow,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub win_percentage: Option<Decimal>,
    pub points_per_game: Option<Decimal>,
}

impl TryFrom<TeamWithStatsRow> for TeamWithStats {
    type Error = StoreError;

    fn try_from(row: TeamWithStatsRow) -> Result<Self, Self::Error> {
        Ok(TeamWithStats {
            team: row.team.try_into()?,
            wins: row.wins,
            losses: row.losses,
            win_percentage: row.win_percentage.unwrap_or(Decimal::ZERO),
            points_per_game: row.points_per_game,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamStandingRow {
    pub team_id: i32,
    pub team_name: String,
    pub city: String,
    pub wins: i32,
    pub losses: i32,
    pub win_percentage: Decimal,
    pub points_per_game: Decimal,
}

impl From<TeamStandingRow> for TeamStanding {
    fn from(row: TeamStandingRow) -> Self {
        TeamStanding {
            team_id: row.team_id,
            team_name: row.team_name,
            city: row.city,
            wins: row.wins,
            losses: row.losses,
            win_percentage: row.win_percentage,
            points_per_game: row.points_per_game,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamSeasonStatsRow {
    pub team_id: i32,
    pub season: String,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub points_per_game: Option<Decimal>,
    pub rebounds_per_game: Option<Decimal>,
    pub assists_per_game: Option<Decimal>,
}

impl From<TeamSeasonStatsRow> for TeamSeasonStats {
    fn from(row: TeamSeasonStatsRow) -> Self {
        TeamSeasonStats {
            team_id: row.team_id,
            season: row.season,
            wins: row.wins.unwrap_or(0),
            losses: row.losses.unwrap_or(0),
            points_per_game: row.points_per_game.unwrap_or(Decimal::ZERO),
            rebounds_per_game: row.rebounds_per_game.unwrap_or(Decimal::ZERO),
            assists_per_game: row.assists_per_game.unwrap_or(Decimal::ZERO),
        }
    }
}
