//! Raw game rows and their mapping into typed records.

use chrono::NaiveDate;
use hoops_core::models::{Game, GameWithTeams};
use hoops_core::StoreError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GameRow {
    pub id: i32,
    pub date: NaiveDate,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub season: String,
    pub game_type: String,
}

impl TryFrom<GameRow> for Game {
    type Error = StoreError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        Ok(Game {
            id: row.id,
            date: row.date,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            home_score: row.home_score.unwrap_or(0),
            away_score: row.away_score.unwrap_or(0),
            season: row.season,
            game_type: row.game_type.parse()?,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GameWithTeamsRow {
    #[sqlx(flatten)]
    pub game: GameRow,
    pub home_team_name: String,
    pub home_team_city: String,
    pub away_team_name: String,
    pub away_team_city: String,
}

impl TryFrom<GameWithTeamsRow> for GameWithTeams {
    type Error = StoreError;

    fn try_from(row: GameWithTeamsRow) -> Result<Self, Self::Error> {
        Ok(GameWithTeams {
            game: row.game.try_into()?,
            home_team_name: row.home_team_name,
            home_team_city: row.home_team_city,
            away_team_name: row.away_team_name,
            away_team_city: row.away_team_city,
        })
    }
}
