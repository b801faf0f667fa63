//! Player repository.
//!
//! Player lookups, rosters, and name search. Every list except the roster
//! carries the current team's name and city.

use hoops_core::models::{Player, PlayerWithTeam, Position};
use hoops_core::{StoreError, StoreResult};
use sqlx::PgPool;

use crate::models::{map_rows, PlayerRow, PlayerWithTeamRow};

const PLAYER_COLUMNS: &str = "p.playerid AS id, p.firstname AS first_name, \
     p.lastname AS last_name, p.position::text AS position, p.height::int AS height, \
     p.weight::int AS weight, p.dateofbirth::date AS date_of_birth, \
     p.draftyear::int AS draft_year, p.currentteamid AS current_team_id";

const TEAM_DISPLAY_COLUMNS: &str = "t.teamname AS team_name, t.city AS team_city";

/// Upper bound on name-search results.
const SEARCH_LIMIT: i64 = 50;

/// Repository for player reads.
#[derive(Debug, Clone)]
pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every player ordered by last then first name.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn all(&self) -> StoreResult<Vec<PlayerWithTeam>> {
        let sql = format!(
            r#"
            SELECT {PLAYER_COLUMNS}, {TEAM_DISPLAY_COLUMNS}
            FROM Players p
            LEFT JOIN Teams t ON p.currentteamid = t.teamid
            ORDER BY p.lastname, p.firstname
            "#
        );
        let rows = sqlx::query_as::<_, PlayerWithTeamRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Gets a player by id.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_id(&self, player_id: i32) -> StoreResult<Option<PlayerWithTeam>> {
        let sql = format!(
            r#"
            SELECT {PLAYER_COLUMNS}, {TEAM_DISPLAY_COLUMNS}
            FROM Players p
            LEFT JOIN Teams t ON p.currentteamid = t.teamid
            WHERE p.playerid = $1
            "#
        );
        let row = sqlx::query_as::<_, PlayerWithTeamRow>(&sql)
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        row.map(PlayerWithTeam::try_from).transpose()
    }

    /// Current roster of a team, ordered by position then last name.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_team(&self, team_id: i32) -> StoreResult<Vec<Player>> {
        let sql = format!(
            r#"
            SELECT {PLAYER_COLUMNS}
            FROM Players p
            WHERE p.currentteamid = $1
            ORDER BY p.position, p.lastname
            "#
        );
        let rows = sqlx::query_as::<_, PlayerRow>(&sql)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Lists the players at one position.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_position(&self, position: Position) -> StoreResult<Vec<PlayerWithTeam>> {
        let sql = format!(
            r#"
            SELECT {PLAYER_COLUMNS}, {TEAM_DISPLAY_COLUMNS}
            FROM Players p
            LEFT JOIN Teams t ON p.currentteamid = t.teamid
            WHERE p.position::text = $1
            ORDER BY p.lastname, p.firstname
            "#
        );
        let rows = sqlx::query_as::<_, PlayerWithTeamRow>(&sql)
            .bind(position.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Case-insensitive substring search over full name and last name.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn search(&self, term: &str) -> StoreResult<Vec<PlayerWithTeam>> {
        let sql = format!(
            r#"
            SELECT {PLAYER_COLUMNS}, {TEAM_DISPLAY_COLUMNS}
            FROM Players p
            LEFT JOIN Teams t ON p.currentteamid = t.teamid
            WHERE LOWER(p.firstname || ' ' || p.lastname) LIKE LOWER($1)
               OR LOWER(p.lastname) LIKE LOWER($1)
            ORDER BY p.lastname, p.firstname
            LIMIT $2
            "#
        );
        let rows = sqlx::query_as::<_, PlayerWithTeamRow>(&sql)
            .bind(search_pattern(term))
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }
}

fn search_pattern(term: &str) -> String {
    format!("%{term}%")
}
