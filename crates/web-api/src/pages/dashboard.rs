use axum::{extract::State, Json};
use serde::Serialize;

use super::GameCard;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_teams: i64,
    pub total_players: i64,
    pub total_games: i64,
    pub recent_games: Vec<GameCard>,
}

/// League totals and the latest games.
///
/// # Errors
/// Returns 500 if the store fails.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardView>, ApiError> {
    let (counts, recent) = tokio::try_join!(
        state.store.entity_counts(),
        state.store.recent_games(state.defaults.recent_games_limit),
    )?;

    Ok(Json(DashboardView {
        total_teams: counts.teams,
        total_players: counts.players,
        total_games: counts.games,
        recent_games: recent.iter().map(GameCard::from).collect(),
    }))
}
