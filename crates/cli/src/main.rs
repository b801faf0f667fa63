use clap::{Parser, Subcommand};

mod commands;

use commands::{DataStatusArgs, LeadersArgs, ServeArgs, StandingsArgs};

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Browse and administer a basketball statistics database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web API server
    Serve(ServeArgs),
    /// Print conference standings for a season
    Standings(StandingsArgs),
    /// Print a season leaderboard
    Leaders(LeadersArgs),
    /// Show row counts and the seasons on record
    DataStatus(DataStatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Standings(args) => commands::run_standings(args).await?,
        Commands::Leaders(args) => commands::run_leaders(args).await?,
        Commands::DataStatus(args) => commands::run_data_status(args).await?,
    }

    Ok(())
}
