//! Page view routes.
//!
//! Each route gathers what one browse page shows and returns it as a JSON
//! view model, with the display strings the page renders already formatted.

pub mod dashboard;
pub mod games;
pub mod players;
pub mod stats;
pub mod teams;
pub mod transactions;

use chrono::NaiveDate;
use hoops_core::format;
use hoops_core::models::{GameType, GameWithTeams, PlayerTransaction, TransactionType};
use serde::Serialize;

/// One game as listed on the dashboard and games pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCard {
    pub id: i32,
    pub date: NaiveDate,
    pub date_label: String,
    pub home_team_id: i32,
    pub home_team: String,
    pub away_team_id: i32,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    /// Away score first, matching the matchup order.
    pub score: String,
    pub home_won: bool,
    pub away_won: bool,
    pub season: String,
    pub game_type: GameType,
}

impl From<&GameWithTeams> for GameCard {
    fn from(g: &GameWithTeams) -> Self {
        Self {
            id: g.game.id,
            date: g.game.date,
            date_label: format::short_date(g.game.date),
            home_team_id: g.game.home_team_id,
            home_team: format!("{} {}", g.home_team_city, g.home_team_name),
            away_team_id: g.game.away_team_id,
            away_team: format!("{} {}", g.away_team_city, g.away_team_name),
            home_score: g.game.home_score,
            away_score: g.game.away_score,
            score: format::score(g.game.away_score, g.game.home_score),
            home_won: g.game.home_won(),
            away_won: g.game.away_won(),
            season: g.game.season.clone(),
            game_type: g.game.game_type,
        }
    }
}

/// A roster transaction line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLine {
    pub id: i32,
    pub player_id: i32,
    pub kind: TransactionType,
    pub from_team_id: Option<i32>,
    pub to_team_id: Option<i32>,
    pub date: NaiveDate,
    /// e.g. `$31.8M`; absent when no value was recorded.
    pub contract: Option<String>,
    pub notes: Option<String>,
}

impl From<&PlayerTransaction> for TransactionLine {
    fn from(t: &PlayerTransaction) -> Self {
        Self {
            id: t.id,
            player_id: t.player_id,
            kind: t.transaction_type,
            from_team_id: t.from_team_id,
            to_team_id: t.to_team_id,
            date: t.date,
            contract: t.contract_value.map(format::contract_value),
            notes: t.notes.clone(),
        }
    }
}
