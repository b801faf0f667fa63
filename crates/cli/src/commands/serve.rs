use anyhow::Result;
use clap::Args;
use hoops_data::DatabaseClient;
use hoops_web_api::{ApiServer, AppState};

use super::load_config;

/// Arguments for the serve command.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: String,

    /// Database connection URL (overrides the config file)
    #[arg(long, env = "DATABASE_URL")]
    pub db_url: Option<String>,
}

/// Runs the web API until Ctrl+C.
///
/// # Errors
/// Returns an error if configuration, the database connection, or the
/// listener fails.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = load_config(&args.config, args.db_url)?;
    let addr = config.server.addr();
    tracing::info!("Starting web API server on {}", addr);

    let db = DatabaseClient::new(&config.database.url, config.database.max_connections).await?;
    let state = AppState::from_database(&db, config.stats.clone());

    ApiServer::new(state)
        .serve_until(&addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
            }
            tracing::info!("Received Ctrl+C, shutting down");
        })
        .await?;

    db.close().await;
    Ok(())
}
