use axum::{
    extract::{Path, Query, State},
    Json,
};
use hoops_core::format;
use hoops_core::models::{top_scorer, BoxScoreLine, GameType, GameWithTeams, Position};
use serde::{Deserialize, Serialize};

use super::GameCard;
use crate::error::{parse_id, ApiError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GamesQuery {
    pub season: Option<String>,
    pub team: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesView {
    pub total: usize,
    pub regular: usize,
    pub playoff: usize,
    pub games: Vec<GameCard>,
}

impl GamesView {
    fn from_games(games: &[GameWithTeams]) -> Self {
        let playoff = games
            .iter()
            .filter(|g| g.game.game_type == GameType::Playoff)
            .count();
        Self {
            total: games.len(),
            regular: games.len() - playoff,
            playoff,
            games: games.iter().map(GameCard::from).collect(),
        }
    }
}

/// Game list: a team's games, a season's games, or the latest league games.
///
/// # Errors
/// Returns 400 for a non-numeric team, 500 if the store fails.
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<GamesQuery>,
) -> Result<Json<GamesView>, ApiError> {
    let team = params
        .team
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| t.trim().parse::<i32>())
        .transpose()
        .map_err(|_| ApiError::BadRequest("Invalid team"))?;
    let season = params.season.as_deref().filter(|s| !s.is_empty());
    let limit = state.defaults.games_limit;

    let games = match (team, season) {
        (Some(team_id), _) => state.store.games_by_team(team_id, limit).await?,
        (None, Some(season)) => state.store.games_by_season(season).await?,
        (None, None) => state.store.recent_games(limit).await?,
    };

    Ok(Json(GamesView::from_games(&games)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxLine {
    pub stat_id: i32,
    pub player_id: i32,
    pub name: String,
    pub position: Position,
    pub minutes: i32,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub turnovers: i32,
    pub field_goals: String,
    pub three_pointers: String,
    pub free_throws: String,
    pub top_scorer: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreSide {
    pub team_id: i32,
    pub team_name: String,
    pub team_city: String,
    pub score: i32,
    pub won: bool,
    pub lines: Vec<BoxLine>,
}

impl BoxScoreSide {
    fn collect(
        team_id: i32,
        team_name: &str,
        team_city: &str,
        score: i32,
        won: bool,
        all: &[BoxScoreLine],
    ) -> Self {
        let side: Vec<BoxScoreLine> = all
            .iter()
            .filter(|l| l.stats.team_id == team_id)
            .cloned()
            .collect();
        let best = top_scorer(&side);
        let lines = side
            .iter()
            .map(|l| {
                let s = &l.stats;
                BoxLine {
                    stat_id: s.id,
                    player_id: s.player_id,
                    name: format!("{} {}", l.first_name, l.last_name),
                    position: l.position,
                    minutes: s.minutes_played,
                    points: s.points,
                    rebounds: s.rebounds,
                    assists: s.assists,
                    steals: s.steals,
                    blocks: s.blocks,
                    turnovers: s.turnovers,
                    field_goals: format::made_attempted(
                        s.field_goals_made,
                        s.field_goals_attempted,
                        '-',
                    ),
                    three_pointers: format::made_attempted(
                        s.three_pointers_made,
                        s.three_pointers_attempted,
                        '-',
                    ),
                    free_throws: format::made_attempted(
                        s.free_throws_made,
                        s.free_throws_attempted,
                        '-',
                    ),
                    top_scorer: best == Some(s.id),
                }
            })
            .collect();
        Self {
            team_id,
            team_name: team_name.to_string(),
            team_city: team_city.to_string(),
            score,
            won,
            lines,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetailView {
    pub id: i32,
    pub date_label: String,
    pub season: String,
    pub game_type: GameType,
    pub score: String,
    pub away: BoxScoreSide,
    pub home: BoxScoreSide,
}

impl GameDetailView {
    fn build(game: &GameWithTeams, lines: &[BoxScoreLine]) -> Self {
        let g = &game.game;
        Self {
            id: g.id,
            date_label: format::long_date(g.date),
            season: g.season.clone(),
            game_type: g.game_type,
            score: format::score(g.away_score, g.home_score),
            away: BoxScoreSide::collect(
                g.away_team_id,
                &game.away_team_name,
                &game.away_team_city,
                g.away_score,
                g.away_won(),
                lines,
            ),
            home: BoxScoreSide::collect(
                g.home_team_id,
                &game.home_team_name,
                &game.home_team_city,
                g.home_score,
                g.home_won(),
                lines,
            ),
        }
    }
}

/// Game page: header and both sides of the box score.
///
/// # Errors
/// Returns 404 for a non-numeric or unknown id, 500 if the store fails.
pub async fn game_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<GameDetailView>, ApiError> {
    let game_id = parse_id(&raw_id)?;

    let (game, lines) = tokio::try_join!(
        state.store.game_by_id(game_id),
        state.store.game_box_score_lines(game_id),
    )?;
    let game = game.ok_or(ApiError::NotFound)?;

    Ok(Json(GameDetailView::build(&game, &lines)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;
    use hoops_core::models::PlayerGameStats;

    fn line(id: i32, team_id: i32, points: i32) -> BoxScoreLine {
        BoxScoreLine {
            stats: PlayerGameStats {
                id,
                player_id: id * 10,
                game_id: 10,
                team_id,
                minutes_played: 30,
                points,
                rebounds: 5,
                assists: 4,
                steals: 1,
                blocks: 0,
                turnovers: 2,
                field_goals_made: 8,
                field_goals_attempted: 17,
                three_pointers_made: 2,
                three_pointers_attempted: 6,
                free_throws_made: 3,
                free_throws_attempted: 4,
            },
            first_name: "First".to_string(),
            last_name: format!("Last{id}"),
            position: Position::SG,
        }
    }

    #[test]
    fn test_counts_by_game_type() {
        let mut playoff = fixtures::game(2, (1, 100), (2, 90));
        playoff.game.game_type = GameType::Playoff;
        let view = GamesView::from_games(&[fixtures::game(1, (1, 100), (2, 90)), playoff]);
        assert_eq!((view.total, view.regular, view.playoff), (2, 1, 1));
    }

    #[test]
    fn test_box_score_split_and_top_scorer() {
        let game = fixtures::game(10, (1, 112), (2, 104));
        let lines = vec![line(1, 1, 20), line(2, 1, 31), line(3, 2, 28), line(4, 2, 12)];

        let view = GameDetailView::build(&game, &lines);

        assert_eq!(view.home.lines.len(), 2);
        assert_eq!(view.away.lines.len(), 2);
        assert!(view.home.won);
        assert!(!view.away.won);
        let home_top: Vec<_> = view.home.lines.iter().filter(|l| l.top_scorer).collect();
        assert_eq!(home_top.len(), 1);
        assert_eq!(home_top[0].stat_id, 2);
        assert!(view.away.lines[0].top_scorer);
        assert_eq!(view.away.lines[0].field_goals, "8-17");
        assert_eq!(view.date_label, "Wednesday, January 15, 2025");
    }
}
