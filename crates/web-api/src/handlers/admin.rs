//! Administrative mutation relay.
//!
//! Each route forwards its body to one roster procedure and answers with the
//! procedure's verdict verbatim. A rejection is a normal 200. A store failure
//! or an unreadable body produces a 500 carrying the same envelope.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use hoops_core::{
    NewGame, NewPlayer, ProcedureOutcome, RemoveRequest, SignRequest, StoreResult, TradeRequest,
    WaiveRequest,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::state::AppState;

/// Wire shape of every admin response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<i32>,
}

/// Which id field an action reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdField {
    Game,
    Player,
    Transaction,
    None,
}

impl AdminResponse {
    fn from_outcome(outcome: ProcedureOutcome, field: IdField) -> Self {
        let mut response = Self {
            success: outcome.success,
            message: outcome.message,
            game_id: None,
            player_id: None,
            transaction_id: None,
        };
        match field {
            IdField::Game => response.game_id = outcome.id,
            IdField::Player => response.player_id = outcome.id,
            IdField::Transaction => response.transaction_id = outcome.id,
            IdField::None => {}
        }
        response
    }

    fn failed(action: &str) -> Self {
        Self {
            success: false,
            message: format!("Failed to {action}"),
            game_id: None,
            player_id: None,
            transaction_id: None,
        }
    }
}

type Reply = (StatusCode, Json<AdminResponse>);

fn failure(action: &'static str) -> Reply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AdminResponse::failed(action)),
    )
}

/// Unwraps the request body, answering an unreadable one with the failure envelope.
fn accept<T>(action: &'static str, payload: Result<Json<T>, JsonRejection>) -> Result<T, Reply> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            error!(action, error = %rejection.body_text(), "Admin request body rejected");
            Err(failure(action))
        }
    }
}

fn relay(action: &'static str, field: IdField, result: StoreResult<ProcedureOutcome>) -> Reply {
    match result {
        Ok(outcome) => {
            info!(action, success = outcome.success, "Admin action relayed");
            (StatusCode::OK, Json(AdminResponse::from_outcome(outcome, field)))
        }
        Err(e) => {
            error!(action, error = %e, "Admin action failed");
            failure(action)
        }
    }
}

pub async fn add_game(
    State(state): State<AppState>,
    payload: Result<Json<NewGame>, JsonRejection>,
) -> Result<Reply, Reply> {
    let request = accept("add game", payload)?;
    let result = state.procedures.add_game(&request).await;
    Ok(relay("add game", IdField::Game, result))
}

pub async fn add_player(
    State(state): State<AppState>,
    payload: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<Reply, Reply> {
    let request = accept("add player", payload)?;
    let result = state.procedures.add_new_player(&request).await;
    Ok(relay("add player", IdField::Player, result))
}

pub async fn trade(
    State(state): State<AppState>,
    payload: Result<Json<TradeRequest>, JsonRejection>,
) -> Result<Reply, Reply> {
    let request = accept("trade player", payload)?;
    let result = state.procedures.trade_player(&request).await;
    Ok(relay("trade player", IdField::Transaction, result))
}

pub async fn sign(
    State(state): State<AppState>,
    payload: Result<Json<SignRequest>, JsonRejection>,
) -> Result<Reply, Reply> {
    let request = accept("sign player", payload)?;
    let result = state.procedures.sign_player(&request).await;
    Ok(relay("sign player", IdField::Transaction, result))
}

pub async fn waive(
    State(state): State<AppState>,
    payload: Result<Json<WaiveRequest>, JsonRejection>,
) -> Result<Reply, Reply> {
    let request = accept("waive player", payload)?;
    let result = state.procedures.waive_player(&request).await;
    Ok(relay("waive player", IdField::Transaction, result))
}

pub async fn remove(
    State(state): State<AppState>,
    payload: Result<Json<RemoveRequest>, JsonRejection>,
) -> Result<Reply, Reply> {
    let request = accept("remove player", payload)?;
    let result = state.procedures.remove_player(&request).await;
    Ok(relay("remove player", IdField::None, result))
}
