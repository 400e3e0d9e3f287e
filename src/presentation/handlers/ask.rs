use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::{ErrorResponse, error_response};

const MISSING_KEY_HINT: &str = "Set CHUTES_API_KEY in environment.";

#[derive(Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub content: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Response {
    let question = match request.question {
        Some(question) if !question.trim().is_empty() => question,
        _ => return error_response(StatusCode::BAD_REQUEST, "Missing 'question'"),
    };

    tracing::debug!(question = %sanitize_prompt(&question), "Answering question");

    match state.tutor_service.ask(&question).await {
        Ok(content) => {
            tracing::info!(chars = content.len(), "Question answered");
            (StatusCode::OK, Json(AskResponse { content })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Question answering failed");
            let hint = e.is_not_configured().then(|| MISSING_KEY_HINT.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Query failed".to_string(),
                    detail: Some(e.to_string()),
                    hint,
                }),
            )
                .into_response()
        }
    }
}
