//! Router tests against in-memory fakes of the store and the procedures.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use hoops_core::models::{
    BoxScoreLine, Conference, EntityCounts, Game, GameType, GameWithTeams, LeaderStat, Player,
    PlayerGameStats, PlayerSeasonStats, PlayerTransaction, PlayerWithTeam, Position, StatsLeader,
    Team, TeamSeasonStats, TeamStanding, TeamWithStats,
};
use hoops_core::{
    NewGame, NewPlayer, ProcedureOutcome, RemoveRequest, RosterProcedures, SignRequest,
    StatsDefaults, StatsStore, StoreError, StoreResult, TradeRequest, WaiveRequest,
};
use hoops_web_api::{ApiServer, AppState};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn team(id: i32, name: &str, city: &str, conference: Conference) -> Team {
    Team {
        id,
        name: name.to_string(),
        city: city.to_string(),
        conference,
        division: "Atlantic".to_string(),
        founded_year: 1946,
    }
}

fn player(id: i32, first: &str, last: &str, position: Position, team: Option<i32>) -> Player {
    Player {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        position,
        height: 79,
        weight: 210,
        date_of_birth: Some(date(1998, 3, 3)),
        draft_year: Some(2017),
        current_team_id: team,
    }
}

fn game(id: i32, on: NaiveDate, home: i32, away: i32, score: (i32, i32)) -> Game {
    Game {
        id,
        date: on,
        home_team_id: home,
        away_team_id: away,
        home_score: score.0,
        away_score: score.1,
        season: "2024-25".to_string(),
        game_type: GameType::Regular,
    }
}

/// Store over fixed vectors; `fail` makes every call a store failure.
#[derive(Default)]
struct FakeStore {
    fail: bool,
    teams: Vec<Team>,
    players: Vec<Player>,
    games: Vec<Game>,
    standings: Vec<(Conference, TeamStanding)>,
    team_stats: Vec<TeamSeasonStats>,
    leaders: Vec<StatsLeader>,
    transactions: Vec<PlayerTransaction>,
}

impl FakeStore {
    fn league() -> Self {
        let teams = vec![
            team(1, "Celtics", "Boston", Conference::East),
            team(2, "Knicks", "New York", Conference::East),
            team(3, "Lakers", "Los Angeles", Conference::West),
        ];
        let players = vec![
            player(7, "Jayson", "Tatum", Position::SF, Some(1)),
            player(8, "Jalen", "Brunson", Position::PG, Some(2)),
            player(9, "Free", "Agent", Position::C, None),
        ];
        let games = vec![
            game(10, date(2025, 1, 10), 1, 2, (110, 101)),
            game(11, date(2025, 1, 12), 3, 1, (99, 104)),
            game(12, date(2025, 1, 12), 2, 3, (120, 118)),
        ];
        let standings = vec![
            (
                Conference::East,
                TeamStanding {
                    team_id: 1,
                    team_name: "Celtics".to_string(),
                    city: "Boston".to_string(),
                    wins: 50,
                    losses: 32,
                    win_percentage: dec!(0.610),
                    points_per_game: dec!(116.3),
                },
            ),
            (
                Conference::East,
                TeamStanding {
                    team_id: 2,
                    team_name: "Knicks".to_string(),
                    city: "New York".to_string(),
                    wins: 45,
                    losses: 37,
                    win_percentage: dec!(0.549),
                    points_per_game: dec!(112.8),
                },
            ),
            (
                Conference::West,
                TeamStanding {
                    team_id: 3,
                    team_name: "Lakers".to_string(),
                    city: "Los Angeles".to_string(),
                    wins: 50,
                    losses: 32,
                    win_percentage: dec!(0.610),
                    points_per_game: dec!(113.4),
                },
            ),
        ];
        let team_stats = vec![TeamSeasonStats {
            team_id: 1,
            season: "2024-25".to_string(),
            wins: 50,
            losses: 32,
            points_per_game: dec!(116.3),
            rebounds_per_game: dec!(44.1),
            assists_per_game: dec!(26.0),
        }];
        let leaders = vec![StatsLeader {
            player_id: 7,
            first_name: "Jayson".to_string(),
            last_name: "Tatum".to_string(),
            team_name: Some("Celtics".to_string()),
            value: dec!(26.8),
        }];
        let transactions = vec![PlayerTransaction {
            id: 100,
            player_id: 8,
            from_team_id: None,
            to_team_id: Some(2),
            transaction_type: hoops_core::models::TransactionType::Signing,
            date: date(2022, 7, 1),
            contract_value: Some(dec!(104000000)),
            notes: None,
        }];
        Self {
            fail: false,
            teams,
            players,
            games,
            standings,
            team_stats,
            leaders,
            transactions,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail {
            Err(StoreError::unavailable("connection refused"))
        } else {
            Ok(())
        }
    }

    fn with_team(&self, p: &Player) -> PlayerWithTeam {
        let team = p
            .current_team_id
            .and_then(|id| self.teams.iter().find(|t| t.id == id));
        PlayerWithTeam {
            player: p.clone(),
            team_name: team.map(|t| t.name.clone()),
            team_city: team.map(|t| t.city.clone()),
        }
    }

    fn with_teams(&self, g: &Game) -> GameWithTeams {
        let find = |id: i32| self.teams.iter().find(|t| t.id == id).cloned();
        let home = find(g.home_team_id).unwrap_or_else(|| team(0, "?", "?", Conference::East));
        let away = find(g.away_team_id).unwrap_or_else(|| team(0, "?", "?", Conference::East));
        GameWithTeams {
            game: g.clone(),
            home_team_name: home.name,
            home_team_city: home.city,
            away_team_name: away.name,
            away_team_city: away.city,
        }
    }

    fn newest_first(&self, filter: impl Fn(&Game) -> bool) -> Vec<GameWithTeams> {
        let mut games: Vec<&Game> = self.games.iter().filter(|g| filter(g)).collect();
        games.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        games.into_iter().map(|g| self.with_teams(g)).collect()
    }
}

#[async_trait]
impl StatsStore for FakeStore {
    async fn all_teams(&self) -> StoreResult<Vec<Team>> {
        self.check()?;
        Ok(self.teams.clone())
    }

    async fn team_by_id(&self, team_id: i32) -> StoreResult<Option<Team>> {
        self.check()?;
        Ok(self.teams.iter().find(|t| t.id == team_id).cloned())
    }

    async fn teams_with_stats(&self, _season: &str) -> StoreResult<Vec<TeamWithStats>> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn team_standings(
        &self,
        _season: &str,
        conference: Option<Conference>,
    ) -> StoreResult<Vec<TeamStanding>> {
        self.check()?;
        Ok(self
            .standings
            .iter()
            .filter(|(c, _)| conference.map_or(true, |want| want == *c))
            .map(|(_, s)| s.clone())
            .collect())
    }

    async fn team_season_stats(
        &self,
        team_id: i32,
        season: &str,
    ) -> StoreResult<Option<TeamSeasonStats>> {
        self.check()?;
        Ok(self
            .team_stats
            .iter()
            .find(|s| s.team_id == team_id && s.season == season)
            .cloned())
    }

    async fn all_players(&self) -> StoreResult<Vec<PlayerWithTeam>> {
        self.check()?;
        Ok(self.players.iter().map(|p| self.with_team(p)).collect())
    }

    async fn player_by_id(&self, player_id: i32) -> StoreResult<Option<PlayerWithTeam>> {
        self.check()?;
        Ok(self
            .players
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| self.with_team(p)))
    }

    async fn players_by_team(&self, team_id: i32) -> StoreResult<Vec<Player>> {
        self.check()?;
        Ok(self
            .players
            .iter()
            .filter(|p| p.current_team_id == Some(team_id))
            .cloned()
            .collect())
    }

    async fn players_by_position(&self, position: Position) -> StoreResult<Vec<PlayerWithTeam>> {
        self.check()?;
        Ok(self
            .players
            .iter()
            .filter(|p| p.position == position)
            .map(|p| self.with_team(p))
            .collect())
    }

    async fn search_players(&self, term: &str) -> StoreResult<Vec<PlayerWithTeam>> {
        self.check()?;
        let term = term.to_lowercase();
        Ok(self
            .players
            .iter()
            .filter(|p| p.full_name().to_lowercase().contains(&term))
            .map(|p| self.with_team(p))
            .collect())
    }

    async fn recent_games(&self, limit: i64) -> StoreResult<Vec<GameWithTeams>> {
        self.check()?;
        let mut games = self.newest_first(|_| true);
        games.truncate(limit as usize);
        Ok(games)
    }

    async fn game_by_id(&self, game_id: i32) -> StoreResult<Option<GameWithTeams>> {
        self.check()?;
        Ok(self
            .games
            .iter()
            .find(|g| g.id == game_id)
            .map(|g| self.with_teams(g)))
    }

    async fn games_by_season(&self, season: &str) -> StoreResult<Vec<GameWithTeams>> {
        self.check()?;
        Ok(self.newest_first(|g| g.season == season))
    }

    async fn games_by_team(&self, team_id: i32, limit: i64) -> StoreResult<Vec<GameWithTeams>> {
        self.check()?;
        let mut games = self.newest_first(|g| g.involves(team_id));
        games.truncate(limit as usize);
        Ok(games)
    }

    async fn available_seasons(&self) -> StoreResult<Vec<String>> {
        self.check()?;
        let mut seasons: Vec<String> = self
            .games
            .iter()
            .map(|g| g.season.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        seasons.sort_by(|a, b| b.cmp(a));
        Ok(seasons)
    }

    async fn player_season_stats(
        &self,
        _player_id: i32,
        _season: &str,
    ) -> StoreResult<Option<PlayerSeasonStats>> {
        self.check()?;
        Ok(None)
    }

    async fn player_all_season_stats(&self, _player_id: i32) -> StoreResult<Vec<PlayerSeasonStats>> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn player_game_stats(
        &self,
        _player_id: i32,
        _limit: i64,
    ) -> StoreResult<Vec<PlayerGameStats>> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn game_box_score(&self, _game_id: i32) -> StoreResult<Vec<PlayerGameStats>> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn game_box_score_lines(&self, _game_id: i32) -> StoreResult<Vec<BoxScoreLine>> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn stat_leaders(
        &self,
        _season: &str,
        _stat: LeaderStat,
        limit: i64,
    ) -> StoreResult<Vec<StatsLeader>> {
        self.check()?;
        Ok(self.leaders.iter().take(limit as usize).cloned().collect())
    }

    async fn player_transactions(&self, player_id: i32) -> StoreResult<Vec<PlayerTransaction>> {
        self.check()?;
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.player_id == player_id)
            .cloned()
            .collect())
    }

    async fn recent_transactions(&self, limit: i64) -> StoreResult<Vec<PlayerTransaction>> {
        self.check()?;
        Ok(self.transactions.iter().take(limit as usize).cloned().collect())
    }

    async fn entity_counts(&self) -> StoreResult<EntityCounts> {
        self.check()?;
        Ok(EntityCounts {
            teams: self.teams.len() as i64,
            players: self.players.len() as i64,
            games: self.games.len() as i64,
        })
    }
}

/// Procedures with a trade rule of their own: a player already on the
/// destination team is rejected. Every call is recorded.
#[derive(Default)]
struct FakeProcedures {
    fail: bool,
    rosters: Mutex<Vec<(i32, i32)>>,
    calls: Mutex<Vec<String>>,
}

impl FakeProcedures {
    fn with_roster(roster: &[(i32, i32)]) -> Self {
        Self {
            rosters: Mutex::new(roster.to_vec()),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn record(&self, call: String) -> StoreResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(StoreError::unavailable("connection reset"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RosterProcedures for FakeProcedures {
    async fn add_new_player(&self, request: &NewPlayer) -> StoreResult<ProcedureOutcome> {
        self.record(format!(
            "add_new_player({}, {}, {})",
            request.last_name, request.birth_date, request.draft_year
        ))?;
        Ok(ProcedureOutcome::accepted("Player added", Some(501)))
    }

    async fn trade_player(&self, request: &TradeRequest) -> StoreResult<ProcedureOutcome> {
        self.record(format!("trade_player({})", request.player_id))?;
        let mut rosters = self.rosters.lock().unwrap();
        let Some(entry) = rosters.iter_mut().find(|(p, _)| *p == request.player_id) else {
            return Ok(ProcedureOutcome::rejected("Player not found"));
        };
        if entry.1 == request.to_team_id {
            return Ok(ProcedureOutcome::rejected(
                "Player is already on the destination team",
            ));
        }
        entry.1 = request.to_team_id;
        Ok(ProcedureOutcome::accepted("Trade completed", Some(900)))
    }

    async fn sign_player(&self, request: &SignRequest) -> StoreResult<ProcedureOutcome> {
        self.record(format!("sign_player({})", request.transaction_type))?;
        Ok(ProcedureOutcome::accepted("Player signed", Some(901)))
    }

    async fn waive_player(&self, request: &WaiveRequest) -> StoreResult<ProcedureOutcome> {
        self.record(format!("waive_player({})", request.player_id))?;
        Ok(ProcedureOutcome::rejected("Player is already a free agent"))
    }

    async fn remove_player(&self, request: &RemoveRequest) -> StoreResult<ProcedureOutcome> {
        self.record(format!("remove_player({})", request.player_id))?;
        Ok(ProcedureOutcome::accepted("Player removed", None))
    }

    async fn add_game(&self, request: &NewGame) -> StoreResult<ProcedureOutcome> {
        self.record(format!("add_game({})", request.season))?;
        Ok(ProcedureOutcome::accepted(
            "Game added successfully (ID: 77)",
            Some(77),
        ))
    }
}

fn app(store: FakeStore, procedures: Arc<FakeProcedures>) -> Router {
    let state = AppState::new(Arc::new(store), procedures, StatsDefaults::default());
    ApiServer::new(state).router()
}

fn league_app() -> Router {
    app(FakeStore::league(), Arc::new(FakeProcedures::default()))
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1_000_000)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

const PAGE_FAILURE: &str = "Failed to connect to database. Please check your database configuration.";

#[tokio::test]
async fn test_team_stats_requires_both_params() {
    let app = league_app();

    let (status, body) = get(&app, "/api/team-stats?teamId=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing teamId or season" }));

    let (status, _) = get(&app, "/api/team-stats?teamId=abc&season=2024-25").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_team_stats_found_and_absent() {
    let app = league_app();

    let (status, body) = get(&app, "/api/team-stats?teamId=1&season=2024-25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wins"], 50);
    assert_eq!(body["teamId"], 1);

    let (status, body) = get(&app, "/api/team-stats?teamId=2&season=2024-25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_team_stats_store_failure() {
    let app = app(FakeStore::failing(), Arc::new(FakeProcedures::default()));
    let (status, body) = get(&app, "/api/team-stats?teamId=1&season=2024-25").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch stats" }));
}

#[tokio::test]
async fn test_trade_accepted_then_rejected() {
    let procedures = Arc::new(FakeProcedures::with_roster(&[(7, 3)]));
    let app = app(FakeStore::league(), procedures.clone());
    let request = json!({ "playerId": 7, "fromTeamId": 3, "toTeamId": 9 });

    let (status, body) = post(&app, "/api/admin/trade", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Trade completed", "transactionId": 900 })
    );

    let (status, body) = post(&app, "/api/admin/trade", request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Player is already on the destination team" })
    );
    assert_eq!(procedures.calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_add_player_forwards_defaults() {
    let procedures = Arc::new(FakeProcedures::default());
    let app = app(FakeStore::league(), procedures.clone());

    let (status, body) = post(
        &app,
        "/api/admin/add-player",
        json!({
            "firstName": "Cooper",
            "lastName": "Flagg",
            "position": "SF",
            "height": 81,
            "weight": 205
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["playerId"], 501);
    assert_eq!(
        procedures.calls.lock().unwrap().as_slice(),
        ["add_new_player(Flagg, 2000-01-01, 2024)".to_string()]
    );
}

#[tokio::test]
async fn test_remaining_admin_routes() {
    let app = league_app();

    let (_, body) = post(
        &app,
        "/api/admin/add-game",
        json!({
            "homeTeamId": 1, "awayTeamId": 2, "homeScore": 101, "awayScore": 99,
            "gameDate": "2025-02-01", "season": "2024-25", "gameType": "Regular"
        }),
    )
    .await;
    assert_eq!(body["gameId"], 77);
    assert_eq!(body["message"], "Game added successfully (ID: 77)");

    let (_, body) = post(
        &app,
        "/api/admin/sign",
        json!({ "playerId": 9, "toTeamId": 1, "transactionType": "Signing" }),
    )
    .await;
    assert_eq!(body["transactionId"], 901);

    let (status, body) = post(&app, "/api/admin/waive", json!({ "playerId": 9 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Player is already a free agent" })
    );

    let (_, body) = post(&app, "/api/admin/remove", json!({ "playerId": 9 })).await;
    assert_eq!(body, json!({ "success": true, "message": "Player removed" }));
}

#[tokio::test]
async fn test_admin_store_failure_is_500() {
    let app = app(FakeStore::league(), Arc::new(FakeProcedures::failing()));
    let (status, body) = post(&app, "/api/admin/remove", json!({ "playerId": 9 })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Failed to remove player" })
    );
}

#[tokio::test]
async fn test_unreadable_admin_body_keeps_envelope() {
    let procedures = Arc::new(FakeProcedures::with_roster(&[(7, 1)]));
    let app = app(FakeStore::league(), procedures.clone());

    let (status, body) = post(
        &app,
        "/api/admin/trade",
        json!({ "playerId": 7, "fromTeamId": null, "toTeamId": 9 }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Failed to trade player" })
    );

    let req = Request::builder()
        .method("POST")
        .uri("/api/admin/waive")
        .body(Body::from("playerId=7"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "success": false, "message": "Failed to waive player" })
    );

    assert!(procedures.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_player_is_404() {
    let app = league_app();
    let (status, _) = get(&app, "/api/players/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/api/players/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_player_detail() {
    let app = league_app();
    let (status, body) = get(&app, "/api/players/8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jalen Brunson");
    assert_eq!(body["team"]["name"], "New York Knicks");
    assert_eq!(body["transactions"][0]["contract"], "$104.0M");
}

#[tokio::test]
async fn test_page_store_failure_message() {
    let app = app(FakeStore::failing(), Arc::new(FakeProcedures::default()));
    for uri in ["/api/dashboard", "/api/teams", "/api/stats", "/api/games/10"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "error": PAGE_FAILURE }), "{uri}");
    }
}

#[tokio::test]
async fn test_dashboard_counts_and_recent_games() {
    let app = league_app();
    let (status, body) = get(&app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalTeams"], 3);
    assert_eq!(body["totalGames"], 3);
    let ids: Vec<_> = body["recentGames"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![12, 11, 10]);
}

#[tokio::test]
async fn test_team_detail() {
    let app = league_app();
    let (status, body) = get(&app, "/api/teams/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["displayName"], "Boston Celtics");
    assert_eq!(body["roster"][0]["height"], "6'7\"");
    assert_eq!(body["currentSeason"], "2024-25");
    assert_eq!(body["seasonStats"]["wins"], 50);
    let games = body["recentGames"].as_array().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["result"], "W");
    assert_eq!(games[0]["opponent"], "Lakers");

    let (status, _) = get(&app, "/api/teams/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_page_standings() {
    let app = league_app();
    let (status, body) = get(&app, "/api/stats?conference=East").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["season"], "2024-25");
    let standings = body["standings"].as_array().unwrap();
    assert_eq!(standings.len(), 1);
    let teams = standings[0]["teams"].as_array().unwrap();
    assert_eq!(teams[0]["team"], "Boston Celtics");
    assert_eq!(teams[0]["winPercentage"], "0.610");
    assert_eq!(teams[1]["winPercentage"], "0.549");
    assert_eq!(body["leaderboards"][0]["leaders"][0]["value"], "26.8");

    let (_, body) = get(&app, "/api/stats").await;
    assert_eq!(body["standings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_players_grouped_and_searched() {
    let app = league_app();

    let (_, body) = get(&app, "/api/players").await;
    assert_eq!(body["shown"], 3);
    let labels: Vec<_> = body["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["Point Guards", "Small Forwards", "Centers"]);

    let (_, body) = get(&app, "/api/players?q=tatum").await;
    assert_eq!(body["shown"], 1);

    let (status, _) = get(&app, "/api/players?position=XX").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_games_filtered_by_team() {
    let app = league_app();
    let (_, body) = get(&app, "/api/games?team=3").await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["regular"], 2);
    for g in body["games"].as_array().unwrap() {
        assert!(g["homeTeamId"] == 3 || g["awayTeamId"] == 3);
    }
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let app = league_app();
    let first = get(&app, "/api/transactions?limit=5").await;
    let second = get(&app, "/api/transactions?limit=5").await;
    assert_eq!(first, second);
    assert_eq!(first.1["transactions"].as_array().unwrap().len(), 1);
}
