//! Roster transaction repository.

use hoops_core::models::PlayerTransaction;
use hoops_core::{StoreError, StoreResult};
use sqlx::PgPool;

use crate::models::{map_rows, PlayerTransactionRow};

const TRANSACTION_SELECT: &str = r#"
    SELECT
        transactionid AS id,
        playerid AS player_id,
        fromteamid AS from_team_id,
        toteamid AS to_team_id,
        transactiontype::text AS transaction_type,
        transactiondate::date AS date,
        contractvalue::numeric AS contract_value,
        notes
    FROM PlayerTransactions
"#;

/// Repository for roster transaction reads.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A player's transaction history, newest first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn by_player(&self, player_id: i32) -> StoreResult<Vec<PlayerTransaction>> {
        let sql = format!(
            "{TRANSACTION_SELECT} WHERE playerid = $1 \
             ORDER BY transactiondate DESC, transactionid DESC"
        );
        let rows = sqlx::query_as::<_, PlayerTransactionRow>(&sql)
            .bind(player_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// League-wide recent transactions.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn recent(&self, limit: i64) -> StoreResult<Vec<PlayerTransaction>> {
        let sql = format!(
            "{TRANSACTION_SELECT} ORDER BY transactiondate DESC, transactionid DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, PlayerTransactionRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }
}
