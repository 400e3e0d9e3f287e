use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, LearnerProgress};
use crate::presentation::state::AppState;

use super::error_response::completion_failure;

pub const DEFAULT_TUTOR_VOICE: &str = "af_heart";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub progress: Option<LearnerProgress>,
    #[serde(default)]
    pub native_language: Option<String>,
    #[serde(default)]
    pub tutor_voice: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorResponse {
    pub content: String,
    pub tutor_voice: String,
}

/// One turn of the spoken tutor. The reply names the voice the app should
/// read it aloud with.
#[tracing::instrument(skip(state, request), fields(messages = request.messages.len()))]
pub async fn tutor_handler(
    State(state): State<AppState>,
    Json(request): Json<TutorRequest>,
) -> Response {
    let tutor_voice = request
        .tutor_voice
        .unwrap_or_else(|| DEFAULT_TUTOR_VOICE.to_string());

    match state
        .tutor_service
        .converse(
            request.messages,
            request.progress.as_ref(),
            request.native_language.as_deref(),
        )
        .await
    {
        Ok(content) => (
            StatusCode::OK,
            Json(TutorResponse {
                content,
                tutor_voice,
            }),
        )
            .into_response(),
        Err(e) => completion_failure(&e),
    }
}
