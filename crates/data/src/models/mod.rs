//! Raw row shapes returned by the store.
//!
//! Rows mirror the aliased column lists of the repository statements and
//! derive `sqlx::FromRow`. Each converts into its `hoops-core` record with an
//! explicit mapping that either defaults a NULL or rejects the row.

pub mod game;
pub mod player;
pub mod stats;
pub mod team;
pub mod transaction;

pub use game::{GameRow, GameWithTeamsRow};
pub use player::{PlayerRow, PlayerWithTeamRow};
pub use stats::{
    BoxScoreLineRow, EntityCountsRow, PlayerGameStatsRow, PlayerSeasonStatsRow, StatsLeaderRow,
};
pub use team::{TeamRow, TeamSeasonStatsRow, TeamStandingRow, TeamWithStatsRow};
pub use transaction::PlayerTransactionRow;

use hoops_core::StoreError;

/// Converts every row, failing on the first one that cannot be shaped.
pub(crate) fn map_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, StoreError>
where
    T: TryFrom<R, Error = StoreError>,
{
    rows.into_iter().map(T::try_from).collect()
}
