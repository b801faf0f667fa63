//! Team repository.
//!
//! Team lookups, season standings, and per-team season aggregates.

use hoops_core::models::{Conference, Team, TeamSeasonStats, TeamStanding, TeamWithStats};
use hoops_core::{StoreError, StoreResult};
use sqlx::PgPool;

use crate::models::{map_rows, TeamRow, TeamSeasonStatsRow, TeamStandingRow, TeamWithStatsRow};

const TEAM_COLUMNS: &str = "t.teamid AS id, t.teamname AS name, t.city, \
     t.conference::text AS conference, t.division, t.foundedyear AS founded_year";

/// Repository for team reads.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every team ordered by name.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn all(&self) -> StoreResult<Vec<Team>> {
        let sql = format!("SELECT {TEAM_COLUMNS} FROM Teams t ORDER BY t.teamname");
        let rows = sqlx::query_as::<_, TeamRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Gets a team by id.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_id(&self, team_id: i32) -> StoreResult<Option<Team>> {
        let sql = format!("SELECT {TEAM_COLUMNS} FROM Teams t WHERE t.teamid = $1");
        let row = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        row.map(Team::try_from).transpose()
    }

    /// Lists every team with its record for `season`.
    ///
    /// Teams without a season row are still listed, with a zero win percentage.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn with_stats(&self, season: &str) -> StoreResult<Vec<TeamWithStats>> {
        let sql = format!(
            r#"
            SELECT
                {TEAM_COLUMNS},
                tss.wins::int AS wins,
                tss.losses::int AS losses,
                CASE WHEN (tss.wins + tss.losses) > 0
                    THEN ROUND(tss.wins::numeric / (tss.wins + tss.losses), 3)
                    ELSE 0
                END::numeric AS win_percentage,
                tss.pointspergame::numeric AS points_per_game
            FROM Teams t
            LEFT JOIN TeamSeasonStats tss ON t.teamid = tss.teamid AND tss.season = $1
            ORDER BY win_percentage DESC, t.teamname
            "#
        );
        let rows = sqlx::query_as::<_, TeamWithStatsRow>(&sql)
            .bind(season)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Conference (or league-wide) standings for `season`.
    ///
    /// Ordered by win percentage, then wins, then team name.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn standings(
        &self,
        season: &str,
        conference: Option<Conference>,
    ) -> StoreResult<Vec<TeamStanding>> {
        let rows = sqlx::query_as::<_, TeamStandingRow>(
            r#"
            SELECT
                t.teamid AS team_id,
                t.teamname AS team_name,
                t.city,
                COALESCE(tss.wins, 0)::int AS wins,
                COALESCE(tss.losses, 0)::int AS losses,
                CASE WHEN (COALESCE(tss.wins, 0) + COALESCE(tss.losses, 0)) > 0
                    THEN ROUND(COALESCE(tss.wins, 0)::numeric
                               / (COALESCE(tss.wins, 0) + COALESCE(tss.losses, 0)), 3)
                    ELSE 0
                END::numeric AS win_percentage,
                COALESCE(tss.pointspergame, 0)::numeric AS points_per_game
            FROM Teams t
            LEFT JOIN TeamSeasonStats tss ON t.teamid = tss.teamid AND tss.season = $1
            WHERE ($2::text IS NULL OR t.conference::text = $2)
            ORDER BY win_percentage DESC, wins DESC, t.teamname
            "#,
        )
        .bind(season)
        .bind(conference.map(|c| c.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Ok(rows.into_iter().map(TeamStanding::from).collect())
    }

    /// Gets one team's aggregate for `season`.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn season_stats(
        &self,
        team_id: i32,
        season: &str,
    ) -> StoreResult<Option<TeamSeasonStats>> {
        let row = sqlx::query_as::<_, TeamSeasonStatsRow>(
            r#"
            SELECT
                teamid AS team_id,
                season,
                wins::int AS wins,
                losses::int AS losses,
                pointspergame::numeric AS points_per_game,
                reboundspergame::numeric AS rebounds_per_game,
                assistspergame::numeric AS assists_per_game
            FROM TeamSeasonStats
            WHERE teamid = $1 AND season = $2
            "#,
        )
        .bind(team_id)
        .bind(season)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Ok(row.map(TeamSeasonStats::from))
    }
}
