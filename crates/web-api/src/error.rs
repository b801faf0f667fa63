//! Error responses for the JSON routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hoops_core::StoreError;
use serde_json::json;

/// Body sent when a page cannot reach the store.
pub const PAGE_STORE_FAILURE: &str =
    "Failed to connect to database. Please check your database configuration.";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    NotFound,
    /// Store failure, already logged, answered with a fixed message.
    Internal(&'static str),
}

impl ApiError {
    /// Logs `err` and hides it behind `message`.
    pub fn store(err: &StoreError, message: &'static str) -> Self {
        tracing::error!(error = %err, "{}", message);
        Self::Internal(message)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::store(&err, PAGE_STORE_FAILURE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Parses a numeric path id; anything else is treated as a missing page.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::NotFound)
}
