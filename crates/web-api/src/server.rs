use crate::handlers::{admin, team_stats};
use crate::pages::{dashboard, games, players, stats, teams, transactions};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/team-stats", get(team_stats::team_stats))
            .route("/api/admin/add-game", post(admin::add_game))
            .route("/api/admin/add-player", post(admin::add_player))
            .route("/api/admin/trade", post(admin::trade))
            .route("/api/admin/sign", post(admin::sign))
            .route("/api/admin/waive", post(admin::waive))
            .route("/api/admin/remove", post(admin::remove))
            .route("/api/dashboard", get(dashboard::dashboard))
            .route("/api/teams", get(teams::list_teams))
            .route("/api/teams/:id", get(teams::team_detail))
            .route("/api/players", get(players::list_players))
            .route("/api/players/:id", get(players::player_detail))
            .route("/api/games", get(games::list_games))
            .route("/api/games/:id", get(games::game_detail))
            .route("/api/stats", get(stats::season_stats))
            .route("/api/transactions", get(transactions::recent_transactions))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Starts the web server listening on the specified address.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the address or serve requests.
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        self.serve_until(addr, std::future::pending()).await
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the address or serve requests.
    pub async fn serve_until<F>(self, addr: &str, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Web API listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
