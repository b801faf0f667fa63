use axum::{
    extract::{Query, State},
    Json,
};
use hoops_core::format;
use hoops_core::models::{Conference, LeaderStat, StatsLeader, TeamStanding};
use hoops_core::{StatsStore, StoreResult};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub season: Option<String>,
    pub conference: Option<String>,
}

impl StatsQuery {
    fn conference(&self) -> Result<Option<Conference>, ApiError> {
        match self.conference.as_deref().map(str::trim) {
            None | Some("" | "All") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ApiError::BadRequest("Unknown conference")),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderLine {
    pub rank: usize,
    pub player_id: i32,
    pub name: String,
    pub team: Option<String>,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub stat: LeaderStat,
    pub unit: &'static str,
    pub leaders: Vec<LeaderLine>,
}

impl Leaderboard {
    fn new(stat: LeaderStat, leaders: &[StatsLeader]) -> Self {
        Self {
            stat,
            unit: stat.unit(),
            leaders: leaders
                .iter()
                .enumerate()
                .map(|(i, l)| LeaderLine {
                    rank: i + 1,
                    player_id: l.player_id,
                    name: format!("{} {}", l.first_name, l.last_name),
                    team: l.team_name.clone(),
                    value: format::per_game(l.value),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingLine {
    pub rank: usize,
    pub team_id: i32,
    pub team: String,
    pub wins: i32,
    pub losses: i32,
    pub win_percentage: String,
    pub points_per_game: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceStandings {
    pub conference: Conference,
    pub label: &'static str,
    pub teams: Vec<StandingLine>,
}

impl ConferenceStandings {
    fn new(conference: Conference, standings: &[TeamStanding]) -> Self {
        Self {
            conference,
            label: conference.label(),
            teams: standings
                .iter()
                .enumerate()
                .map(|(i, s)| StandingLine {
                    rank: i + 1,
                    team_id: s.team_id,
                    team: format!("{} {}", s.city, s.team_name),
                    wins: s.wins,
                    losses: s.losses,
                    win_percentage: format::win_percentage(s.win_percentage),
                    points_per_game: format::per_game(s.points_per_game),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub season: String,
    pub seasons: Vec<String>,
    pub leaderboards: Vec<Leaderboard>,
    pub standings: Vec<ConferenceStandings>,
}

/// Standings for `conference`, or nothing when it is filtered out.
async fn standings_if(
    store: &dyn StatsStore,
    season: &str,
    conference: Conference,
    filter: Option<Conference>,
) -> StoreResult<Option<Vec<TeamStanding>>> {
    if filter.is_some_and(|f| f != conference) {
        return Ok(None);
    }
    store.team_standings(season, Some(conference)).await.map(Some)
}

/// Season leaderboards and conference standings.
///
/// The season is the requested one, else the newest with games, else the
/// configured default.
///
/// # Errors
/// Returns 400 for an unknown conference, 500 if the store fails.
pub async fn season_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsView>, ApiError> {
    let conference = params.conference()?;
    let store = state.store.as_ref();

    let seasons = store.available_seasons().await?;
    let season = params
        .season
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| seasons.first().cloned())
        .unwrap_or_else(|| state.defaults.default_season.clone());
    let limit = state.defaults.leaders_limit;

    let (points, rebounds, assists, east, west) = tokio::try_join!(
        store.stat_leaders(&season, LeaderStat::Points, limit),
        store.stat_leaders(&season, LeaderStat::Rebounds, limit),
        store.stat_leaders(&season, LeaderStat::Assists, limit),
        standings_if(store, &season, Conference::East, conference),
        standings_if(store, &season, Conference::West, conference),
    )?;

    let standings = [(Conference::East, east), (Conference::West, west)]
        .into_iter()
        .filter_map(|(c, rows)| rows.map(|rows| ConferenceStandings::new(c, &rows)))
        .collect();

    Ok(Json(StatsView {
        season,
        seasons,
        leaderboards: vec![
            Leaderboard::new(LeaderStat::Points, &points),
            Leaderboard::new(LeaderStat::Rebounds, &rebounds),
            Leaderboard::new(LeaderStat::Assists, &assists),
        ],
        standings,
    }))
}
