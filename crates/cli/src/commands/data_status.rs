//! Data status CLI command.
//!
//! Shows how many teams, players and games are on record, and which seasons
//! have games. Useful to confirm a database is seeded before serving it.

use anyhow::Result;
use clap::Args;
use hoops_core::{ReportFormatter, StatsStore};

use super::connect;

/// Arguments for the data-status command.
#[derive(Args, Debug, Clone)]
pub struct DataStatusArgs {
    /// Database connection URL (uses DATABASE_URL env var if not provided)
    #[arg(long, env = "DATABASE_URL")]
    pub db_url: Option<String>,
}

/// Runs the data-status command.
///
/// # Errors
/// Returns an error if database connection or queries fail.
pub async fn run_data_status(args: DataStatusArgs) -> Result<()> {
    let (db, _config) = connect(args.db_url).await?;
    let store = db.repositories();

    let (counts, seasons) = tokio::try_join!(store.entity_counts(), store.available_seasons())?;
    println!("{}", ReportFormatter::data_status(&counts, &seasons));

    if counts.games == 0 {
        tracing::warn!("No games on record; pages will fall back to the default season");
    }

    db.close().await;
    Ok(())
}
