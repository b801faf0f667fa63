use axum::{
    extract::{Path, State},
    Json,
};
use hoops_core::format;
use hoops_core::models::{
    Conference, GameWithTeams, Player, Position, Team, TeamSeasonStats,
};
use serde::Serialize;

use crate::error::{parse_id, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsView {
    pub east: Vec<Team>,
    pub west: Vec<Team>,
    pub total: usize,
}

impl TeamsView {
    fn split(teams: Vec<Team>) -> Self {
        let total = teams.len();
        let (east, west) = teams
            .into_iter()
            .partition(|t| t.conference == Conference::East);
        Self { east, west, total }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: i32,
    pub name: String,
    pub position: Position,
    pub height: String,
    pub weight: String,
}

impl From<&Player> for RosterEntry {
    fn from(p: &Player) -> Self {
        Self {
            player_id: p.id,
            name: p.full_name(),
            position: p.position,
            height: format::height(p.height),
            weight: format::weight(p.weight),
        }
    }
}

/// A recent game from this team's side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGameEntry {
    pub game_id: i32,
    pub won: bool,
    /// "W" or "L".
    pub result: &'static str,
    pub date_label: String,
    /// Team score first.
    pub score: String,
    pub opponent: String,
    pub is_home: bool,
}

impl TeamGameEntry {
    fn for_team(game: &GameWithTeams, team_id: i32) -> Option<Self> {
        let result = game.game.result_for(team_id)?;
        Some(Self {
            game_id: game.game.id,
            won: result.won,
            result: if result.won { "W" } else { "L" },
            date_label: format::short_date(game.game.date),
            score: format::score(result.team_score, result.opponent_score),
            opponent: game.opponent_name(team_id)?.to_string(),
            is_home: result.is_home,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailView {
    pub team: Team,
    pub display_name: String,
    pub roster: Vec<RosterEntry>,
    pub recent_games: Vec<TeamGameEntry>,
    pub seasons: Vec<String>,
    pub current_season: Option<String>,
    pub season_stats: Option<TeamSeasonStats>,
}

/// Teams split by conference.
///
/// # Errors
/// Returns 500 if the store fails.
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<TeamsView>, ApiError> {
    let teams = state.store.all_teams().await?;
    Ok(Json(TeamsView::split(teams)))
}

/// Team page: roster, recent results, and the latest season's aggregate.
///
/// # Errors
/// Returns 404 for a non-numeric or unknown id, 500 if the store fails.
pub async fn team_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TeamDetailView>, ApiError> {
    let team_id = parse_id(&raw_id)?;
    let store = &state.store;

    let (team, roster, games, seasons) = tokio::try_join!(
        store.team_by_id(team_id),
        store.players_by_team(team_id),
        store.games_by_team(team_id, state.defaults.recent_games_limit),
        store.available_seasons(),
    )?;
    let team = team.ok_or(ApiError::NotFound)?;

    // Depends on the season list.
    let current_season = seasons.first().cloned();
    let season_stats = match &current_season {
        Some(season) => store.team_season_stats(team_id, season).await?,
        None => None,
    };

    Ok(Json(TeamDetailView {
        display_name: team.display_name(),
        team,
        roster: roster.iter().map(RosterEntry::from).collect(),
        recent_games: games
            .iter()
            .filter_map(|g| TeamGameEntry::for_team(g, team_id))
            .collect(),
        seasons,
        current_season,
        season_stats,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;

    fn team(id: i32, name: &str, conference: Conference) -> Team {
        Team {
            id,
            name: name.to_string(),
            city: "City".to_string(),
            conference,
            division: "Division".to_string(),
            founded_year: 1946,
        }
    }

    #[test]
    fn test_split_keeps_order_within_conference() {
        let view = TeamsView::split(vec![
            team(1, "Celtics", Conference::East),
            team(3, "Lakers", Conference::West),
            team(2, "Knicks", Conference::East),
        ]);
        assert_eq!(view.total, 3);
        assert_eq!(
            view.east.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(view.west.len(), 1);
    }

    #[test]
    fn test_team_game_entry_from_away_side() {
        let game = fixtures::game(10, (1, 99), (2, 104));
        let entry = TeamGameEntry::for_team(&game, 2).unwrap();
        assert!(entry.won);
        assert_eq!(entry.result, "W");
        assert_eq!(entry.score, "104\u{2013}99");
        assert_eq!(entry.opponent, "Celtics");
        assert!(!entry.is_home);
    }

    #[test]
    fn test_team_game_entry_skips_unrelated_game() {
        let game = fixtures::game(10, (1, 99), (2, 104));
        assert!(TeamGameEntry::for_team(&game, 7).is_none());
    }
}
