use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::TutorError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
            hint: None,
        }
    }
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(error))).into_response()
}

/// Maps an upstream HTTP status onto ours, falling back to 502 for codes that
/// are not valid HTTP statuses.
pub fn relayed_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Relays an upstream error body with its status. Bodies that are not JSON
/// become `{}`.
pub fn relayed_json(status: u16, body: &str) -> Response {
    let body = serde_json::from_str::<Value>(body).unwrap_or_else(|_| json!({}));
    (relayed_status(status), Json(body)).into_response()
}

/// The shared failure mapping of the tutor chat routes.
pub fn completion_failure(error: &TutorError) -> Response {
    if error.is_not_configured() {
        return error_response(StatusCode::NOT_IMPLEMENTED, "CHUTES_API_KEY not configured");
    }

    tracing::error!(error = %error, "Tutor completion failed");
    match error.upstream_status() {
        Some(status) => error_response(relayed_status(status), format!("Chat failed: {}", status)),
        None => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong"),
    }
}
