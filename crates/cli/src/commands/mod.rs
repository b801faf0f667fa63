//! CLI commands for the basketball statistics service.

pub mod data_status;
pub mod leaders;
pub mod serve;
pub mod standings;

pub use data_status::{run_data_status, DataStatusArgs};
pub use leaders::{run_leaders, LeadersArgs};
pub use serve::{run_serve, ServeArgs};
pub use standings::{run_standings, StandingsArgs};

use anyhow::Result;
use hoops_core::{AppConfig, ConfigLoader, StatsStore};
use hoops_data::DatabaseClient;

/// Loads configuration, letting an explicit database URL win.
fn load_config(config_path: &str, db_url: Option<String>) -> Result<AppConfig> {
    let mut config = ConfigLoader::load_from(config_path)?;
    if let Some(url) = db_url {
        config.database.url = url;
    }
    Ok(config)
}

async fn connect(db_url: Option<String>) -> Result<(DatabaseClient, AppConfig)> {
    let config = load_config("config/Config.toml", db_url)?;
    let db = DatabaseClient::new(&config.database.url, config.database.max_connections).await?;
    tracing::info!("Connected to database");
    Ok((db, config))
}

/// The requested season, else the newest with games, else the configured default.
async fn resolve_season(
    store: &dyn StatsStore,
    requested: Option<String>,
    config: &AppConfig,
) -> Result<String> {
    if let Some(season) = requested {
        return Ok(season);
    }
    let seasons = store.available_seasons().await?;
    Ok(seasons
        .into_iter()
        .next()
        .unwrap_or_else(|| config.stats.default_season.clone()))
}
