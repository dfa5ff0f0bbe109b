//! API error type mapped to the JSON response envelope.
//!
//! Every user-visible failure is a bad request: malformed JSON on insert,
//! a malformed query string, an unknown id, or a backend I/O failure.
//! Each produces HTTP 400 with `{"status": "error", "body": null,
//! "error": "message"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docdb_core::error::DbError;
use serde_json::json;

/// Application-level error type that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input: JSON body, query string, or unknown id.
    BadRequest(String),
    /// Backend I/O failure on a user-visible operation.
    Storage(String),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Parse(e) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Storage(msg) => msg,
        };
        let body = Json(json!({
            "status": "error",
            "body": null,
            "error": message,
        }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
