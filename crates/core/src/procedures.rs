//! Requests and results of the administrative roster procedures.
//!
//! Requests carry exactly the fields the admin forms collect. Nothing here
//! checks roster legality; that belongs to the procedures themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result envelope returned by every roster procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureOutcome {
    pub success: bool,
    /// Human-readable message, relayed verbatim.
    pub message: String,
    /// New player, transaction, or game id when the procedure produced one.
    pub id: Option<i32>,
}

impl ProcedureOutcome {
    pub fn accepted(message: impl Into<String>, id: Option<i32>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}

fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

fn default_draft_year() -> i32 {
    2024
}

/// Input to `add_new_player`.
///
/// The admin form collects no birth date or draft year, so those fall back to
/// fixed placeholders when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub height: i32,
    pub weight: i32,
    #[serde(default = "default_birth_date")]
    pub birth_date: NaiveDate,
    #[serde(default = "default_draft_year")]
    pub draft_year: i32,
}

/// Input to `trade_player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub player_id: i32,
    pub from_team_id: i32,
    pub to_team_id: i32,
}

/// Input to `sign_player`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub player_id: i32,
    pub to_team_id: i32,
    /// Forwarded untouched, typically "Signing" or "Draft".
    pub transaction_type: String,
}

/// Input to `waive_player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiveRequest {
    pub player_id: i32,
}

/// Input to `remove_player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRequest {
    pub player_id: i32,
}

/// Input to `add_game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub game_date: NaiveDate,
    pub season: String,
    pub game_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_player_defaults_missing_fields() {
        let player: NewPlayer = serde_json::from_value(json!({
            "firstName": "Cooper",
            "lastName": "Flagg",
            "position": "SF",
            "height": 81,
            "weight": 205
        }))
        .unwrap();

        assert_eq!(player.birth_date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(player.draft_year, 2024);
    }

    #[test]
    fn test_new_player_keeps_supplied_fields() {
        let player: NewPlayer = serde_json::from_value(json!({
            "firstName": "Cooper",
            "lastName": "Flagg",
            "position": "SF",
            "height": 81,
            "weight": 205,
            "birthDate": "2006-12-21",
            "draftYear": 2025
        }))
        .unwrap();

        assert_eq!(player.birth_date, NaiveDate::from_ymd_opt(2006, 12, 21).unwrap());
        assert_eq!(player.draft_year, 2025);
    }

    #[test]
    fn test_trade_request_wire_names() {
        let trade: TradeRequest =
            serde_json::from_value(json!({"playerId": 7, "fromTeamId": 3, "toTeamId": 9})).unwrap();
        assert_eq!(
            trade,
            TradeRequest {
                player_id: 7,
                from_team_id: 3,
                to_team_id: 9
            }
        );
    }

    #[test]
    fn test_rejected_outcome_has_no_id() {
        let outcome = ProcedureOutcome::rejected("Player is already on that team");
        assert!(!outcome.success);
        assert_eq!(outcome.id, None);
    }
}
