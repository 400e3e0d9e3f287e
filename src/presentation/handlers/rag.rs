use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Deserialize)]
pub struct RagRequest {
    #[serde(default)]
    pub query: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RagResponse {
    pub chunks: Vec<String>,
}

impl RagResponse {
    fn empty() -> Self {
        Self { chunks: Vec::new() }
    }
}

/// Returns the corpus passages most relevant to `query`.
///
/// The body is parsed by hand so that a malformed payload degrades to an
/// empty result instead of a rejection.
#[tracing::instrument(skip(state, body))]
pub async fn rag_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: RagRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable retrieval request");
            return (StatusCode::OK, Json(RagResponse::empty())).into_response();
        }
    };

    let query = match request.query {
        Some(Value::String(query)) if !query.is_empty() => query,
        _ => return error_response(StatusCode::BAD_REQUEST, "Missing query"),
    };

    tracing::debug!(query = %sanitize_prompt(&query), "Retrieving context");

    let chunks = state.retrieval_service.retrieve(&query).await;

    tracing::info!(chunks = chunks.len(), "Retrieval successful");
    (StatusCode::OK, Json(RagResponse { chunks })).into_response()
}
