use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use hoops_core::format;
use hoops_core::models::{
    PlayerGameStats, PlayerSeasonStats, PlayerTransaction, PlayerWithTeam, Position,
};
use serde::{Deserialize, Serialize};

use super::TransactionLine;
use crate::error::{parse_id, ApiError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PlayersQuery {
    pub position: Option<String>,
    pub q: Option<String>,
}

impl PlayersQuery {
    /// `None` means every position; "All" and blank behave the same.
    fn position(&self) -> Result<Option<Position>, ApiError> {
        match self.position.as_deref().map(str::trim) {
            None | Some("" | "All") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ApiError::BadRequest("Unknown position")),
        }
    }

    fn search_term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub height: String,
    pub weight: String,
    pub team_id: Option<i32>,
    /// "City Name" of the current team; absent for free agents.
    pub team: Option<String>,
    pub free_agent: bool,
}

impl From<&PlayerWithTeam> for PlayerCard {
    fn from(p: &PlayerWithTeam) -> Self {
        Self {
            id: p.player.id,
            name: p.player.full_name(),
            position: p.player.position,
            height: format::height(p.player.height),
            weight: format::weight(p.player.weight),
            team_id: p.player.current_team_id,
            team: p.team_display_name(),
            free_agent: p.player.is_free_agent(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionGroup {
    pub position: Position,
    pub label: &'static str,
    pub count: usize,
    pub players: Vec<PlayerCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersView {
    pub position: Option<Position>,
    pub query: Option<String>,
    pub shown: usize,
    pub groups: Vec<PositionGroup>,
}

/// Groups players in roster order, dropping empty positions.
fn group_by_position(players: &[PlayerWithTeam], only: Option<Position>) -> Vec<PositionGroup> {
    let positions: Vec<Position> = match only {
        Some(position) => vec![position],
        None => Position::ALL.to_vec(),
    };
    positions
        .into_iter()
        .filter_map(|position| {
            let cards: Vec<PlayerCard> = players
                .iter()
                .filter(|p| p.player.position == position)
                .map(PlayerCard::from)
                .collect();
            (!cards.is_empty()).then(|| PositionGroup {
                position,
                label: position.group_label(),
                count: cards.len(),
                players: cards,
            })
        })
        .collect()
}

/// Player browser, optionally narrowed to one position or a name search.
///
/// # Errors
/// Returns 400 for an unknown position, 500 if the store fails.
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<PlayersQuery>,
) -> Result<Json<PlayersView>, ApiError> {
    let position = params.position()?;
    let store = &state.store;

    let players = match (params.search_term(), position) {
        (Some(term), _) => store.search_players(term).await?,
        (None, Some(position)) => store.players_by_position(position).await?,
        (None, None) => store.all_players().await?,
    };

    let groups = group_by_position(&players, position);
    Ok(Json(PlayersView {
        position,
        query: params.search_term().map(str::to_string),
        shown: groups.iter().map(|g| g.count).sum(),
        groups,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLink {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLine {
    pub season: String,
    pub games_played: i32,
    pub points: String,
    pub rebounds: String,
    pub assists: String,
    pub steals: String,
    pub blocks: String,
    pub field_goal_pct: String,
    pub three_point_pct: String,
    pub free_throw_pct: String,
}

impl From<&PlayerSeasonStats> for SeasonLine {
    fn from(s: &PlayerSeasonStats) -> Self {
        Self {
            season: s.season.clone(),
            games_played: s.games_played,
            points: format::per_game(s.avg_points),
            rebounds: format::per_game(s.avg_rebounds),
            assists: format::per_game(s.avg_assists),
            steals: format::per_game(s.avg_steals),
            blocks: format::per_game(s.avg_blocks),
            field_goal_pct: format::percentage(s.field_goal_percentage),
            three_point_pct: format::percentage(s.three_point_percentage),
            free_throw_pct: format::percentage(s.free_throw_percentage),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogLine {
    pub game_id: i32,
    pub minutes: i32,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub field_goals: String,
    pub three_pointers: String,
}

impl From<&PlayerGameStats> for GameLogLine {
    fn from(g: &PlayerGameStats) -> Self {
        Self {
            game_id: g.game_id,
            minutes: g.minutes_played,
            points: g.points,
            rebounds: g.rebounds,
            assists: g.assists,
            field_goals: format::made_attempted(g.field_goals_made, g.field_goals_attempted, '/'),
            three_pointers: format::made_attempted(
                g.three_pointers_made,
                g.three_pointers_attempted,
                '/',
            ),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailView {
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub height: String,
    pub weight: String,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<u32>,
    /// Draft year, or "Undrafted".
    pub draft: String,
    pub team: Option<TeamLink>,
    pub seasons: Vec<SeasonLine>,
    pub recent_games: Vec<GameLogLine>,
    pub transactions: Vec<TransactionLine>,
}

impl PlayerDetailView {
    fn build(
        player: &PlayerWithTeam,
        seasons: &[PlayerSeasonStats],
        games: &[PlayerGameStats],
        transactions: &[PlayerTransaction],
        today: NaiveDate,
    ) -> Self {
        let p = &player.player;
        let team = p
            .current_team_id
            .zip(player.team_display_name())
            .map(|(id, name)| TeamLink { id, name });
        Self {
            id: p.id,
            name: p.full_name(),
            position: p.position,
            height: format::height(p.height),
            weight: format::weight(p.weight),
            date_of_birth: p.date_of_birth,
            age: p.age_on(today),
            draft: p
                .draft_year
                .map_or_else(|| "Undrafted".to_string(), |y| y.to_string()),
            team,
            seasons: seasons.iter().map(SeasonLine::from).collect(),
            recent_games: games.iter().map(GameLogLine::from).collect(),
            transactions: transactions.iter().map(TransactionLine::from).collect(),
        }
    }
}

/// Player page: bio, career lines, recent games, and roster history.
///
/// # Errors
/// Returns 404 for a non-numeric or unknown id, 500 if the store fails.
pub async fn player_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PlayerDetailView>, ApiError> {
    let player_id = parse_id(&raw_id)?;
    let store = &state.store;

    let (player, seasons, games, transactions) = tokio::try_join!(
        store.player_by_id(player_id),
        store.player_all_season_stats(player_id),
        store.player_game_stats(player_id, state.defaults.player_games_limit),
        store.player_transactions(player_id),
    )?;
    let player = player.ok_or(ApiError::NotFound)?;

    Ok(Json(PlayerDetailView::build(
        &player,
        &seasons,
        &games,
        &transactions,
        Local::now().date_naive(),
    )))
}
