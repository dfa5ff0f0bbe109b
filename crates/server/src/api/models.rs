//! Request and response data transfer objects.
//!
//! Every endpoint responds with the same envelope:
//! `{"status": "ok"|"error", "body": ..., "error"?: string}`.
//! Success bodies are built here; error envelopes come from
//! [`ApiError`](crate::api::errors::ApiError).

use docdb_core::search::SearchHit;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope: `{"status": "ok", "body": ...}`.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: &'static str,
    pub body: Value,
}

impl Envelope {
    pub fn ok(body: Value) -> Self {
        Self {
            status: "ok",
            body,
        }
    }
}

/// Query parameters for `GET /docs`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The query string; absent means the empty query.
    #[serde(default)]
    pub q: String,
    /// `skipIndex=true` forces a full scan.
    #[serde(default, rename = "skipIndex")]
    pub skip_index: String,
}

impl SearchParams {
    pub fn skip_index(&self) -> bool {
        self.skip_index == "true"
    }
}

/// One entry of the search response body.
#[derive(Debug, Serialize)]
pub struct SearchHitBody {
    pub id: String,
    pub body: Value,
}

impl From<SearchHit> for SearchHitBody {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id,
            body: Value::Object(hit.document),
        }
    }
}

/// Response body for `GET /health` (served outside the envelope; liveness
/// probes read it directly).
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub document_count: usize,
}
