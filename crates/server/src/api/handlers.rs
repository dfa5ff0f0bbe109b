//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::models::*;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use docdb_core::query;
use docdb_core::storage::Database;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State`
/// extractor. The database handles are process-lifetime.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub start_time: Instant,
}

/// `POST /docs`
///
/// Body is a single JSON document. The document is stored first, then
/// indexed; index failures never fail the insert.
pub async fn add_document(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let Json(value) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Value::Object(doc) = value else {
        return Err(ApiError::BadRequest(
            "document must be a JSON object".to_owned(),
        ));
    };

    let id = state.db.insert(&doc)?;
    tracing::info!(id = %id, "document inserted");
    Ok(Json(Envelope::ok(json!({ "id": id }))))
}

/// `GET /docs?q=<query>&skipIndex=<bool>`
pub async fn search_documents(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Envelope>, ApiError> {
    let parsed = query::parse(&params.q).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let hits = state.db.search(&parsed, params.skip_index())?;
    let documents: Vec<SearchHitBody> = hits.into_iter().map(Into::into).collect();
    let count = documents.len();

    tracing::debug!(query = %params.q, count, "search complete");
    Ok(Json(Envelope::ok(json!({
        "documents": documents,
        "count": count,
    }))))
}

/// `GET /docs/:id`
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, ApiError> {
    let document = state
        .db
        .get(&id)?
        .ok_or_else(|| ApiError::BadRequest(format!("no document with id `{id}`")))?;

    Ok(Json(Envelope::ok(
        json!({ "document": Value::Object(document) }),
    )))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let document_count = state.db.document_count().unwrap_or(0);
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        document_count,
    })
}
