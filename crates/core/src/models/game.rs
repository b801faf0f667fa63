//! Game records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Regular,
    Playoff,
}

impl GameType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Regular => "Regular",
            GameType::Playoff => "Playoff",
        }
    }
}

impl FromStr for GameType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(GameType::Regular),
            "Playoff" => Ok(GameType::Playoff),
            other => Err(UnknownVariant::new("game type", other)),
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub date: NaiveDate,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    /// Season label, e.g. "2024-25".
    pub season: String,
    pub game_type: GameType,
}

/// A game seen from one participant's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub is_home: bool,
    pub won: bool,
    pub team_score: i32,
    pub opponent_score: i32,
}

impl Game {
    #[must_use]
    pub fn home_won(&self) -> bool {
        self.home_score > self.away_score
    }

    #[must_use]
    pub fn away_won(&self) -> bool {
        self.away_score > self.home_score
    }

    #[must_use]
    pub fn involves(&self, team_id: i32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Returns the result for `team_id`, or `None` if the team did not play.
    #[must_use]
    pub fn result_for(&self, team_id: i32) -> Option<TeamResult> {
        if !self.involves(team_id) {
            return None;
        }
        let is_home = self.home_team_id == team_id;
        let (team_score, opponent_score) = if is_home {
            (self.home_score, self.away_score)
        } else {
            (self.away_score, self.home_score)
        };
        Some(TeamResult {
            is_home,
            won: team_score > opponent_score,
            team_score,
            opponent_score,
        })
    }
}

/// A game with the display fields of both teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWithTeams {
    #[serde(flatten)]
    pub game: Game,
    pub home_team_name: String,
    pub home_team_city: String,
    pub away_team_name: String,
    pub away_team_city: String,
}

impl GameWithTeams {
    /// Name of the team `team_id` played against.
    #[must_use]
    pub fn opponent_name(&self, team_id: i32) -> Option<&str> {
        if self.game.home_team_id == team_id {
            Some(&self.away_team_name)
        } else if self.game.away_team_id == team_id {
            Some(&self.home_team_name)
        } else {
            None
        }
    }
}
