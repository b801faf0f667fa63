use axum::{
    extract::{Query, State},
    Json,
};
use hoops_core::models::TeamSeasonStats;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsQuery {
    pub team_id: Option<String>,
    pub season: Option<String>,
}

impl TeamStatsQuery {
    fn parse(&self) -> Option<(i32, &str)> {
        let team_id = self.team_id.as_deref()?.trim().parse().ok()?;
        let season = self.season.as_deref().filter(|s| !s.is_empty())?;
        Some((team_id, season))
    }
}

/// One team's aggregate for a season, or `null` when none is recorded.
///
/// # Errors
/// 400 when either parameter is missing or the team id is not numeric,
/// 500 when the store fails.
pub async fn team_stats(
    State(state): State<AppState>,
    Query(params): Query<TeamStatsQuery>,
) -> Result<Json<Option<TeamSeasonStats>>, ApiError> {
    let (team_id, season) = params
        .parse()
        .ok_or(ApiError::BadRequest("Missing teamId or season"))?;

    let stats = state
        .store
        .team_season_stats(team_id, season)
        .await
        .map_err(|e| ApiError::store(&e, "Failed to fetch stats"))?;

    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(team_id: Option<&str>, season: Option<&str>) -> TeamStatsQuery {
        TeamStatsQuery {
            team_id: team_id.map(str::to_string),
            season: season.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_requires_both_params() {
        assert_eq!(query(Some("3"), Some("2024-25")).parse(), Some((3, "2024-25")));
        assert_eq!(query(None, Some("2024-25")).parse(), None);
        assert_eq!(query(Some("3"), None).parse(), None);
        assert_eq!(query(Some("3"), Some("")).parse(), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric_team() {
        assert_eq!(query(Some("celtics"), Some("2024-25")).parse(), None);
    }
}
