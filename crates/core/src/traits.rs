use crate::error::StoreError;
use crate::models::{
    BoxScoreLine, Conference, EntityCounts, GameWithTeams, LeaderStat, Player, PlayerGameStats,
    PlayerSeasonStats, PlayerTransaction, PlayerWithTeam, Position, StatsLeader, Team,
    TeamSeasonStats, TeamStanding, TeamWithStats,
};
use crate::procedures::{
    NewGame, NewPlayer, ProcedureOutcome, RemoveRequest, SignRequest, TradeRequest, WaiveRequest,
};
use async_trait::async_trait;

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the statistics schema.
///
/// Each method issues one parameterized statement. Empty results are `Ok` with
/// an empty vector and by-id lookups return `Ok(None)` when nothing matches.
#[async_trait]
pub trait StatsStore: Send + Sync {
    async fn all_teams(&self) -> StoreResult<Vec<Team>>;
    async fn team_by_id(&self, team_id: i32) -> StoreResult<Option<Team>>;
    async fn teams_with_stats(&self, season: &str) -> StoreResult<Vec<TeamWithStats>>;
    async fn team_standings(
        &self,
        season: &str,
        conference: Option<Conference>,
    ) -> StoreResult<Vec<TeamStanding>>;
    async fn team_season_stats(
        &self,
        team_id: i32,
        season: &str,
    ) -> StoreResult<Option<TeamSeasonStats>>;

    async fn all_players(&self) -> StoreResult<Vec<PlayerWithTeam>>;
    async fn player_by_id(&self, player_id: i32) -> StoreResult<Option<PlayerWithTeam>>;
    async fn players_by_team(&self, team_id: i32) -> StoreResult<Vec<Player>>;
    async fn players_by_position(&self, position: Position) -> StoreResult<Vec<PlayerWithTeam>>;
    async fn search_players(&self, term: &str) -> StoreResult<Vec<PlayerWithTeam>>;

    async fn recent_games(&self, limit: i64) -> StoreResult<Vec<GameWithTeams>>;
    async fn game_by_id(&self, game_id: i32) -> StoreResult<Option<GameWithTeams>>;
    async fn games_by_season(&self, season: &str) -> StoreResult<Vec<GameWithTeams>>;
    async fn games_by_team(&self, team_id: i32, limit: i64) -> StoreResult<Vec<GameWithTeams>>;
    async fn available_seasons(&self) -> StoreResult<Vec<String>>;

    async fn player_season_stats(
        &self,
        player_id: i32,
        season: &str,
    ) -> StoreResult<Option<PlayerSeasonStats>>;
    async fn player_all_season_stats(&self, player_id: i32) -> StoreResult<Vec<PlayerSeasonStats>>;
    async fn player_game_stats(
        &self,
        player_id: i32,
        limit: i64,
    ) -> StoreResult<Vec<PlayerGameStats>>;
    async fn game_box_score(&self, game_id: i32) -> StoreResult<Vec<PlayerGameStats>>;
    async fn game_box_score_lines(&self, game_id: i32) -> StoreResult<Vec<BoxScoreLine>>;
    async fn stat_leaders(
        &self,
        season: &str,
        stat: LeaderStat,
        limit: i64,
    ) -> StoreResult<Vec<StatsLeader>>;

    async fn player_transactions(&self, player_id: i32) -> StoreResult<Vec<PlayerTransaction>>;
    async fn recent_transactions(&self, limit: i64) -> StoreResult<Vec<PlayerTransaction>>;

    async fn entity_counts(&self) -> StoreResult<EntityCounts>;
}

/// The administrative procedures living in the database.
///
/// Implementations forward the request and hand back whatever the procedure
/// reported. A business rejection is `Ok` with `success == false`.
#[async_trait]
pub trait RosterProcedures: Send + Sync {
    async fn add_new_player(&self, request: &NewPlayer) -> StoreResult<ProcedureOutcome>;
    async fn trade_player(&self, request: &TradeRequest) -> StoreResult<ProcedureOutcome>;
    async fn sign_player(&self, request: &SignRequest) -> StoreResult<ProcedureOutcome>;
    async fn waive_player(&self, request: &WaiveRequest) -> StoreResult<ProcedureOutcome>;
    async fn remove_player(&self, request: &RemoveRequest) -> StoreResult<ProcedureOutcome>;
    async fn add_game(&self, request: &NewGame) -> StoreResult<ProcedureOutcome>;
}
