//! Game repository.
//!
//! Every game list is ordered newest first, with the game id breaking ties
//! between games on the same date.

use hoops_core::models::GameWithTeams;
use hoops_core::{StoreError, StoreResult};
use sqlx::PgPool;

use crate::models::{map_rows, GameWithTeamsRow};

const GAME_WITH_TEAMS_SELECT: &str = r#"
    SELECT
        g.gameid AS id,
        g.gamedate::date AS date,
        g.hometeamid AS home_team_id,
        g.awayteamid AS away_team_id,
        g.homescore::int AS home_score,
        g.awayscore::int AS away_score,
        g.season,
        g.gametype::text AS game_type,
        ht.teamname AS home_team_name,
        ht.city AS home_team_city,
        at.teamname AS away_team_name,
        at.city AS away_team_city
    FROM Games g
    JOIN Teams ht ON g.hometeamid = ht.teamid
    JOIN Teams at ON g.awayteamid = at.teamid
"#;

const NEWEST_FIRST: &str = "ORDER BY g.gamedate DESC, g.gameid DESC";

/// Repository for game reads.
#[derive(Debug, Clone)]
pub struct GameRepository {
    pool: PgPool,
}

impl GameRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recent games across the league.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn recent(&self, limit: i64) -> StoreResult<Vec<GameWithTeams>> {
        let sql = format!("{GAME_WITH_TEAMS_SELECT} {NEWEST_FIRST} LIMIT $1");
        let rows = sqlx::query_as::<_, GameWithTeamsRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Gets a game by id.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_id(&self, game_id: i32) -> StoreResult<Option<GameWithTeams>> {
        let sql = format!("{GAME_WITH_TEAMS_SELECT} WHERE g.gameid = $1");
        let row = sqlx::query_as::<_, GameWithTeamsRow>(&sql)
            .bind(game_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        row.map(GameWithTeams::try_from).transpose()
    }

    /// All games of one season.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_season(&self, season: &str) -> StoreResult<Vec<GameWithTeams>> {
        let sql = format!("{GAME_WITH_TEAMS_SELECT} WHERE g.season = $1 {NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, GameWithTeamsRow>(&sql)
            .bind(season)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Games a team played, home or away.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_team(&self, team_id: i32, limit: i64) -> StoreResult<Vec<GameWithTeams>> {
        let sql = format!(
            "{GAME_WITH_TEAMS_SELECT} WHERE g.hometeamid = $1 OR g.awayteamid = $1 \
             {NEWEST_FIRST} LIMIT $2"
        );
        let rows = sqlx::query_as::<_, GameWithTeamsRow>(&sql)
            .bind(team_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Distinct season labels, newest first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn available_seasons(&self) -> StoreResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT season FROM Games ORDER BY season DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)
    }
}
