use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub stats: StatsDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` suitable for binding.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Default season and list sizes used by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsDefaults {
    /// Used when the store has no games yet.
    pub default_season: String,
    pub games_limit: i64,
    pub leaders_limit: i64,
    pub recent_games_limit: i64,
    pub player_games_limit: i64,
    pub transactions_limit: i64,
}

impl Default for StatsDefaults {
    fn default() -> Self {
        Self {
            default_season: "2024-25".to_string(),
            games_limit: 100,
            leaders_limit: 10,
            recent_games_limit: 5,
            player_games_limit: 10,
            transactions_limit: 20,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/hoops".to_string(),
                max_connections: 10,
            },
            stats: StatsDefaults::default(),
        }
    }
}
