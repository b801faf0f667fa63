use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::TransactionLine;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TransactionsView {
    pub transactions: Vec<TransactionLine>,
}

/// League-wide recent roster moves.
///
/// # Errors
/// Returns 500 if the store fails.
pub async fn recent_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionsQuery>,
) -> Result<Json<TransactionsView>, ApiError> {
    let limit = params
        .limit
        .filter(|l| *l > 0)
        .unwrap_or(state.defaults.transactions_limit);
    let transactions = state.store.recent_transactions(limit).await?;

    Ok(Json(TransactionsView {
        transactions: transactions.iter().map(TransactionLine::from).collect(),
    }))
}
