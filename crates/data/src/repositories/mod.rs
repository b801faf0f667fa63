//! Read-side repositories over the league schema.
//!
//! Each repository owns the statements for one table family. `Repositories`
//! bundles them over a single pool and serves them as a [`StatsStore`].

pub mod game_repo;
pub mod player_repo;
pub mod stats_repo;
pub mod summary_repo;
pub mod team_repo;
pub mod transaction_repo;

pub use game_repo::GameRepository;
pub use player_repo::PlayerRepository;
pub use stats_repo::StatsRepository;
pub use summary_repo::SummaryRepository;
pub use team_repo::TeamRepository;
pub use transaction_repo::TransactionRepository;

use async_trait::async_trait;
use hoops_core::models::{
    BoxScoreLine, Conference, EntityCounts, GameWithTeams, LeaderStat, Player, PlayerGameStats,
    PlayerSeasonStats, PlayerTransaction, PlayerWithTeam, Position, StatsLeader, Team,
    TeamSeasonStats, TeamStanding, TeamWithStats,
};
use hoops_core::{StatsStore, StoreResult};
use sqlx::PgPool;

/// Creates all repositories from a single database pool.
#[derive(Debug, Clone)]
pub struct Repositories {
    pub teams: TeamRepository,
    pub players: PlayerRepository,
    pub games: GameRepository,
    pub stats: StatsRepository,
    pub transactions: TransactionRepository,
    pub summary: SummaryRepository,
}

impl Repositories {
    /// Creates a new set of repositories from a database pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            teams: TeamRepository::new(pool.clone()),
            players: PlayerRepository::new(pool.clone()),
            games: GameRepository::new(pool.clone()),
            stats: StatsRepository::new(pool.clone()),
            transactions: TransactionRepository::new(pool.clone()),
            summary: SummaryRepository::new(pool),
        }
    }
}

#[async_trait]
impl StatsStore for Repositories {
    async fn all_teams(&self) -> StoreResult<Vec<Team>> {
        self.teams.all().await
    }

    async fn team_by_id(&self, team_id: i32) -> StoreResult<Option<Team>> {
        self.teams.by_id(team_id).await
    }

    async fn teams_with_stats(&self, season: &str) -> StoreResult<Vec<TeamWithStats>> {
        self.teams.with_stats(season).await
    }

    async fn team_standings(
        &self,
        season: &str,
        conference: Option<Conference>,
    ) -> StoreResult<Vec<TeamStanding>> {
        self.teams.standings(season, conference).await
    }

    async fn team_season_stats(
        &self,
        team_id: i32,
        season: &str,
    ) -> StoreResult<Option<TeamSeasonStats>> {
        self.teams.season_stats(team_id, season).await
    }

    async fn all_players(&self) -> StoreResult<Vec<PlayerWithTeam>> {
        self.players.all().await
    }

    async fn player_by_id(&self, player_id: i32) -> StoreResult<Option<PlayerWithTeam>> {
        self.players.by_id(player_id).await
    }

    async fn players_by_team(&self, team_id: i32) -> StoreResult<Vec<Player>> {
        self.players.by_team(team_id).await
    }

    async fn players_by_position(&self, position: Position) -> StoreResult<Vec<PlayerWithTeam>> {
        self.players.by_position(position).await
    }

    async fn search_players(&self, term: &str) -> StoreResult<Vec<PlayerWithTeam>> {
        self.players.search(term).await
    }

    async fn recent_games(&self, limit: i64) -> StoreResult<Vec<GameWithTeams>> {
        self.games.recent(limit).await
    }

    async fn game_by_id(&self, game_id: i32) -> StoreResult<Option<GameWithTeams>> {
        self.games.by_id(game_id).await
    }

    async fn games_by_season(&self, season: &str) -> StoreResult<Vec<GameWithTeams>> {
        self.games.by_season(season).await
    }

    async fn games_by_team(&self, team_id: i32, limit: i64) -> StoreResult<Vec<GameWithTeams>> {
        self.games.by_team(team_id, limit).await
    }

    async fn available_seasons(&self) -> StoreResult<Vec<String>> {
        self.games.available_seasons().await
    }

    async fn player_season_stats(
        &self,
        player_id: i32,
        season: &str,
    ) -> StoreResult<Option<PlayerSeasonStats>> {
        self.stats.player_season(player_id, season).await
    }

    async fn player_all_season_stats(&self, player_id: i32) -> StoreResult<Vec<PlayerSeasonStats>> {
        self.stats.player_all_seasons(player_id).await
    }

    async fn player_game_stats(
        &self,
        player_id: i32,
        limit: i64,
    ) -> StoreResult<Vec<PlayerGameStats>> {
        self.stats.player_games(player_id, limit).await
    }

    async fn game_box_score(&self, game_id: i32) -> StoreResult<Vec<PlayerGameStats>> {
        self.stats.box_score(game_id).await
    }

    async fn game_box_score_lines(&self, game_id: i32) -> StoreResult<Vec<BoxScoreLine>> {
        self.stats.box_score_lines(game_id).await
    }

    async fn stat_leaders(
        &self,
        season: &str,
        stat: LeaderStat,
        limit: i64,
    ) -> StoreResult<Vec<StatsLeader>> {
        self.stats.leaders(season, stat, limit).await
    }

    async fn player_transactions(&self, player_id: i32) -> StoreResult<Vec<PlayerTransaction>> {
        self.transactions.by_player(player_id).await
    }

    async fn recent_transactions(&self, limit: i64) -> StoreResult<Vec<PlayerTransaction>> {
        self.transactions.recent(limit).await
    }

    async fn entity_counts(&self) -> StoreResult<EntityCounts> {
        self.summary.entity_counts().await
    }
}
