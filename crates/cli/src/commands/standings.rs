use anyhow::Result;
use clap::Args;
use hoops_core::models::Conference;
use hoops_core::{ReportFormatter, StatsStore};

use super::{connect, resolve_season};

/// Arguments for the standings command.
#[derive(Args, Debug, Clone)]
pub struct StandingsArgs {
    /// Season label, e.g. "2024-25" (defaults to the newest on record)
    #[arg(long)]
    pub season: Option<String>,

    /// Restrict to one conference ("East" or "West")
    #[arg(long)]
    pub conference: Option<Conference>,

    /// Database connection URL (uses DATABASE_URL env var if not provided)
    #[arg(long, env = "DATABASE_URL")]
    pub db_url: Option<String>,
}

/// Prints standings for one or both conferences.
///
/// # Errors
/// Returns an error if the database connection or queries fail.
pub async fn run_standings(args: StandingsArgs) -> Result<()> {
    let (db, config) = connect(args.db_url).await?;
    let store = db.repositories();
    let season = resolve_season(&store, args.season, &config).await?;

    let conferences = match args.conference {
        Some(conference) => vec![conference],
        None => Conference::ALL.to_vec(),
    };
    for conference in conferences {
        let standings = store.team_standings(&season, Some(conference)).await?;
        println!(
            "{}",
            ReportFormatter::standings(&season, Some(conference), &standings)
        );
    }

    db.close().await;
    Ok(())
}
