//! Team records and conference standings.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// Conference a team plays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::East, Conference::West];

    /// Returns the string stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::East => "East",
            Conference::West => "West",
        }
    }

    /// Returns the heading used on standings views.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Conference::East => "Eastern Conference",
            Conference::West => "Western Conference",
        }
    }
}

impl FromStr for Conference {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "East" => Ok(Conference::East),
            "West" => Ok(Conference::West),
            other => Err(UnknownVariant::new("conference", other)),
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub conference: Conference,
    pub division: String,
    pub founded_year: i32,
}

impl Team {
    /// "City Name", the way every view labels a team.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }
}

/// A team joined with one season's record.
///
/// The season columns are absent when the team has no row for that season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithStats {
    #[serde(flatten)]
    pub team: Team,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub win_percentage: Decimal,
    pub points_per_game: Option<Decimal>,
}

/// One row of a conference standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: i32,
    pub team_name: String,
    pub city: String,
    pub wins: i32,
    pub losses: i32,
    /// Rounded to three places by the store.
    pub win_percentage: Decimal,
    pub points_per_game: Decimal,
}

/// Precomputed per-team season aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSeasonStats {
    pub team_id: i32,
    pub season: String,
    pub wins: i32,
    pub losses: i32,
    pub points_per_game: Decimal,
    pub rebounds_per_game: Decimal,
    pub assists_per_game: Decimal,
}
