//! Player records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// Playing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// Roster order used when grouping players.
    pub const ALL: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];

    /// Returns the string stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }

    /// Plural group heading, e.g. "Point Guards".
    #[must_use]
    pub fn group_label(&self) -> &'static str {
        match self {
            Position::PG => "Point Guards",
            Position::SG => "Shooting Guards",
            Position::SF => "Small Forwards",
            Position::PF => "Power Forwards",
            Position::C => "Centers",
        }
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            other => Err(UnknownVariant::new("position", other)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    /// Height in inches.
    pub height: i32,
    /// Weight in pounds.
    pub weight: i32,
    pub date_of_birth: Option<NaiveDate>,
    pub draft_year: Option<i32>,
    /// `None` for free agents.
    pub current_team_id: Option<i32>,
}

impl Player {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn is_free_agent(&self) -> bool {
        self.current_team_id.is_none()
    }

    /// Age in whole years on `today`, if the birth date is known.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.and_then(|dob| today.years_since(dob))
    }
}

/// A player with the display fields of their current team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWithTeam {
    #[serde(flatten)]
    pub player: Player,
    pub team_name: Option<String>,
    pub team_city: Option<String>,
}

impl PlayerWithTeam {
    /// "City Name" of the current team, if any.
    #[must_use]
    pub fn team_display_name(&self) -> Option<String> {
        match (&self.team_city, &self.team_name) {
            (Some(city), Some(name)) => Some(format!("{city} {name}")),
            (None, Some(name)) => Some(name.clone()),
            _ => None,
        }
    }
}
