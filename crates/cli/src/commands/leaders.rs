use anyhow::Result;
use clap::Args;
use hoops_core::models::LeaderStat;
use hoops_core::{ReportFormatter, StatsStore};

use super::{connect, resolve_season};

/// Arguments for the leaders command.
#[derive(Args, Debug, Clone)]
pub struct LeadersArgs {
    /// Season label, e.g. "2024-25" (defaults to the newest on record)
    #[arg(long)]
    pub season: Option<String>,

    /// Statistic to rank by: points, rebounds, or assists
    #[arg(long, default_value = "points")]
    pub stat: LeaderStat,

    /// Number of players to show
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(1..))]
    pub limit: i64,

    /// Database connection URL (uses DATABASE_URL env var if not provided)
    #[arg(long, env = "DATABASE_URL")]
    pub db_url: Option<String>,
}

/// Prints one season leaderboard.
///
/// # Errors
/// Returns an error if the database connection or query fails.
pub async fn run_leaders(args: LeadersArgs) -> Result<()> {
    let (db, config) = connect(args.db_url).await?;
    let store = db.repositories();
    let season = resolve_season(&store, args.season, &config).await?;

    let leaders = store.stat_leaders(&season, args.stat, args.limit).await?;
    println!("{}", ReportFormatter::leaders(&season, args.stat, &leaders));

    db.close().await;
    Ok(())
}
