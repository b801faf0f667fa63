//! Relay for the administrative roster procedures.
//!
//! Each call forwards its arguments to one stored procedure and returns the
//! procedure's own verdict. Roster legality lives in the database; a rejected
//! request is a normal outcome, only a store failure is an error.

use async_trait::async_trait;
use hoops_core::{
    NewGame, NewPlayer, ProcedureOutcome, RemoveRequest, RosterProcedures, SignRequest,
    StoreError, StoreResult, TradeRequest, WaiveRequest,
};
use sqlx::PgPool;
use tracing::debug;

/// Row shape shared by every roster procedure.
///
/// `id` is aliased from `player_id` or `transaction_id` depending on the call.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProcedureRow {
    success: Option<bool>,
    message: Option<String>,
    id: Option<i32>,
}

impl From<ProcedureRow> for ProcedureOutcome {
    fn from(row: ProcedureRow) -> Self {
        ProcedureOutcome {
            success: row.success.unwrap_or(false),
            message: row.message.unwrap_or_default(),
            id: row.id,
        }
    }
}

fn missing_row(procedure: &str) -> StoreError {
    StoreError::unavailable(format!("{procedure} returned no result row"))
}

/// Postgres-backed [`RosterProcedures`].
#[derive(Debug, Clone)]
pub struct ProcedureRelay {
    pool: PgPool,
}

impl ProcedureRelay {
    /// Creates a relay over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn outcome(procedure: &str, row: Option<ProcedureRow>) -> StoreResult<ProcedureOutcome> {
        let outcome: ProcedureOutcome = row.ok_or_else(|| missing_row(procedure))?.into();
        debug!(
            procedure,
            success = outcome.success,
            id = ?outcome.id,
            "Roster procedure returned"
        );
        Ok(outcome)
    }
}

#[async_trait]
impl RosterProcedures for ProcedureRelay {
    async fn add_new_player(&self, request: &NewPlayer) -> StoreResult<ProcedureOutcome> {
        let row = sqlx::query_as::<_, ProcedureRow>(
            "SELECT success, message, player_id AS id \
             FROM add_new_player($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.position)
        .bind(request.height)
        .bind(request.weight)
        .bind(request.birth_date)
        .bind(request.draft_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Self::outcome("add_new_player", row)
    }

    async fn trade_player(&self, request: &TradeRequest) -> StoreResult<ProcedureOutcome> {
        let row = sqlx::query_as::<_, ProcedureRow>(
            "SELECT success, message, transaction_id AS id FROM trade_player($1, $2, $3)",
        )
        .bind(request.player_id)
        .bind(request.from_team_id)
        .bind(request.to_team_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Self::outcome("trade_player", row)
    }

    async fn sign_player(&self, request: &SignRequest) -> StoreResult<ProcedureOutcome> {
        let row = sqlx::query_as::<_, ProcedureRow>(
            "SELECT success, message, transaction_id AS id FROM sign_player($1, $2, $3)",
        )
        .bind(request.player_id)
        .bind(request.to_team_id)
        .bind(&request.transaction_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Self::outcome("sign_player", row)
    }

    async fn waive_player(&self, request: &WaiveRequest) -> StoreResult<ProcedureOutcome> {
        let row = sqlx::query_as::<_, ProcedureRow>(
            "SELECT success, message, transaction_id AS id FROM waive_player($1)",
        )
        .bind(request.player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Self::outcome("waive_player", row)
    }

    async fn remove_player(&self, request: &RemoveRequest) -> StoreResult<ProcedureOutcome> {
        let row = sqlx::query_as::<_, ProcedureRow>(
            "SELECT success, message, NULL::int AS id FROM remove_player($1)",
        )
        .bind(request.player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Self::outcome("remove_player", row)
    }

    /// Games have no procedure; the row is inserted directly.
    async fn add_game(&self, request: &NewGame) -> StoreResult<ProcedureOutcome> {
        let game_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO Games (hometeamid, awayteamid, homescore, awayscore, gamedate, season, gametype)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING gameid
            "#,
        )
        .bind(request.home_team_id)
        .bind(request.away_team_id)
        .bind(request.home_score)
        .bind(request.away_score)
        .bind(request.game_date)
        .bind(&request.season)
        .bind(&request.game_type)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        debug!(game_id, season = %request.season, "Game inserted");
        Ok(ProcedureOutcome::accepted(
            format!("Game added successfully (ID: {game_id})"),
            Some(game_id),
        ))
    }
}
