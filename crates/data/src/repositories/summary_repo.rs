//! League-wide row counts.

use hoops_core::models::EntityCounts;
use hoops_core::{StoreError, StoreResult};
use sqlx::PgPool;

use crate::models::EntityCountsRow;

/// Repository for summary figures shown on the dashboard.
#[derive(Debug, Clone)]
pub struct SummaryRepository {
    pool: PgPool,
}

impl SummaryRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Team, player and game totals read in one statement so they agree.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn entity_counts(&self) -> StoreResult<EntityCounts> {
        let row = sqlx::query_as::<_, EntityCountsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM Teams) AS teams,
                (SELECT COUNT(*) FROM Players) AS players,
                (SELECT COUNT(*) FROM Games) AS games
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Ok(row.into())
    }
}
