use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::PronunciationBackendError;
use crate::domain::{DEFAULT_USER_ID, PronunciationAttempt};
use crate::presentation::state::AppState;

use super::error_response::{ErrorResponse, error_response, relayed_status};

/// How the Sabdakrida backend is started locally.
pub(super) const SABDAKRIDA_START_COMMAND: &str =
    "python -m uvicorn sabdakrida.main:app --port 8010";

#[derive(Deserialize)]
pub struct DrillsQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Proxies the learner's drill priorities. When the backend cannot be reached
/// the learner simply gets no drills.
#[tracing::instrument(skip(state, query))]
pub async fn drills_handler(
    State(state): State<AppState>,
    Query(query): Query<DrillsQuery>,
) -> Response {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    match state.pronunciation_backend.drills(&user_id).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(PronunciationBackendError::Upstream { status, body }) => {
            tracing::warn!(status, body = %body, "Drill lookup rejected");
            error_response(relayed_status(status), "Drills unavailable")
        }
        Err(e) => {
            tracing::warn!(error = %e, "Pronunciation backend unreachable");
            (StatusCode::OK, Json(json!({ "drills": [] }))).into_response()
        }
    }
}

#[derive(Default)]
struct SessionForm {
    audio: Option<Bytes>,
    target_text: Option<String>,
    user_id: Option<String>,
}

async fn read_session_form(mut multipart: Multipart) -> Result<SessionForm, String> {
    let mut form = SessionForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("audio") => form.audio = Some(field.bytes().await.map_err(|e| e.to_string())?),
            Some("target_text") => {
                form.target_text = Some(field.text().await.map_err(|e| e.to_string())?)
            }
            Some("user_id") => form.user_id = Some(field.text().await.map_err(|e| e.to_string())?),
            _ => {}
        }
    }

    Ok(form)
}

/// Forwards a recorded attempt for assessment and relays the verdict.
#[tracing::instrument(skip(state, multipart))]
pub async fn session_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_session_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed session upload");
            return error_response(StatusCode::BAD_REQUEST, "Invalid multipart body");
        }
    };

    let Some(audio) = form.audio.filter(|a| !a.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'audio' file");
    };
    let Some(target_text) = form.target_text.filter(|t| !t.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'target_text'");
    };

    let attempt = PronunciationAttempt::new(audio, target_text, form.user_id);
    tracing::debug!(user_id = %attempt.user_id, bytes = attempt.audio.len(), "Assessing pronunciation");

    match state.pronunciation_backend.assess(&attempt).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(PronunciationBackendError::Upstream { status, body }) => {
            tracing::warn!(status, body = %body, "Assessment rejected");
            error_response(
                relayed_status(status),
                format!("Assessment failed: {}", body),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Pronunciation backend unreachable");
            let body = ErrorResponse {
                error: "Pronunciation backend unavailable".to_string(),
                detail: Some(e.to_string()),
                hint: Some(format!(
                    "Start the pronunciation backend ({}) and set SABDAKRIDA_URL.",
                    SABDAKRIDA_START_COMMAND
                )),
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
