//! Raw player rows and their mapping into typed records.

use chrono::NaiveDate;
use hoops_core::models::{Player, PlayerWithTeam};
use hoops_core::StoreError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub height: i32,
    pub weight: i32,
    pub date_of_birth: Option<NaiveDate>,
    pub draft_year: Option<i32>,
    pub current_team_id: Option<i32>,
}

impl TryFrom<PlayerRow> for Player {
    type Error = StoreError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        Ok(Player {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position.parse()?,
            height: row.height,
            weight: row.weight,
            date_of_birth: row.date_of_birth,
            draft_year: row.draft_year,
            current_team_id: row.current_team_id,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerWithTeamRow {
    #[sqlx(flatten)]
    pub player: PlayerRow,
    pub team_name: Option<String>,
    pub team_city: Option<String>,
}

impl TryFrom<PlayerWithTeamRow> for PlayerWithTeam {
    type Error = StoreError;

    fn try_from(row: PlayerWithTeamRow) -> Result<Self, Self::Error> {
        Ok(PlayerWithTeam {
            player: row.player.try_into()?,
            team_name: row.team_name,
            team_city: row.team_city,
        })
    }
}
