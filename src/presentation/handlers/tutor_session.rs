use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::TutorBackendError;
use crate::domain::{
    DEFAULT_LEVEL, Pathway, TutorSessionStart, TutorSubmission, parse_level, parse_level_text,
};
use crate::presentation::state::AppState;

use super::error_response::{error_response, relayed_json, relayed_status};
use super::pronunciation::SABDAKRIDA_START_COMMAND;

const TUTOR_UNAVAILABLE: &str = "Tutor unavailable. Is Sabdakrida running?";

fn tutor_unavailable_with_command() -> Response {
    error_response(
        StatusCode::SERVICE_UNAVAILABLE,
        format!(
            "Tutor unavailable. Is the Sabdakrida backend running? ({})",
            SABDAKRIDA_START_COMMAND
        ),
    )
}

#[derive(Deserialize)]
pub struct SessionStartRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub level: Option<Value>,
}

#[tracing::instrument(skip(state, request))]
pub async fn session_start_handler(
    State(state): State<AppState>,
    Json(request): Json<SessionStartRequest>,
) -> Response {
    let zone_id = request.zone_id.as_deref().map(str::trim).unwrap_or_default();
    if zone_id.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'zone_id'");
    }

    let start = TutorSessionStart::new(request.user_id, zone_id, parse_level(request.level.as_ref()));

    match state.tutor_backend.start_session(&start).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(TutorBackendError::Upstream { status, body }) => {
            tracing::warn!(status, body = %body, "Session start rejected");
            error_response(
                relayed_status(status),
                format!("Session start failed: {}", status),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Tutor backend unreachable");
            tutor_unavailable_with_command()
        }
    }
}

#[derive(Default)]
struct SubmissionForm {
    user_id: Option<String>,
    zone_id: Option<String>,
    level: Option<String>,
    user_input: Option<String>,
    audio: Option<Bytes>,
}

async fn read_submission_form(mut multipart: Multipart) -> Result<SubmissionForm, String> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("audio") => form.audio = Some(field.bytes().await.map_err(|e| e.to_string())?),
            Some(text_field @ ("user_id" | "zone_id" | "level" | "user_input")) => {
                let value = Some(field.text().await.map_err(|e| e.to_string())?);
                match text_field {
                    "user_id" => form.user_id = value,
                    "zone_id" => form.zone_id = value,
                    "level" => form.level = value,
                    _ => form.user_input = value,
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Submits a learner's typed or spoken answer for assessment.
#[tracing::instrument(skip(state, multipart))]
pub async fn session_submit_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Response {
    let form = match read_submission_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed submission upload");
            return error_response(StatusCode::BAD_REQUEST, "Invalid multipart body");
        }
    };

    let zone_id = form.zone_id.as_deref().map(str::trim).unwrap_or_default();
    if zone_id.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'zone_id'");
    }

    let level = form
        .level
        .as_deref()
        .map_or(DEFAULT_LEVEL, parse_level_text);
    let submission = TutorSubmission::new(form.user_id, zone_id, level, form.user_input, form.audio);

    match state.tutor_backend.submit(&submission).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(TutorBackendError::Upstream { status, body }) => {
            tracing::warn!(status, body = %body, "Submission rejected");
            error_response(
                relayed_status(status),
                format!("Assessment failed: {}", status),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Tutor backend unreachable");
            tutor_unavailable_with_command()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn tutor_profile_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    match state.tutor_backend.profile(&user_id).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(TutorBackendError::Upstream { status, body }) => relayed_json(status, &body),
        Err(e) => {
            tracing::error!(error = %e, "Tutor profile unavailable");
            error_response(StatusCode::SERVICE_UNAVAILABLE, TUTOR_UNAVAILABLE)
        }
    }
}

/// The zone's learning pathway, falling back to the built-in curriculum when
/// the backend cannot provide one.
#[tracing::instrument(skip(state))]
pub async fn tutor_pathway_handler(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Response {
    let error = match state.tutor_backend.pathway(&zone_id).await {
        Ok(body) => return (StatusCode::OK, Json(body)).into_response(),
        Err(e) => e,
    };

    if let Some(fallback) = Pathway::fallback(&zone_id) {
        tracing::warn!(error = %error, "Serving built-in pathway");
        return (StatusCode::OK, Json(fallback)).into_response();
    }

    match error {
        TutorBackendError::Upstream { status, body } => relayed_json(status, &body),
        e => {
            tracing::error!(error = %e, "Tutor pathway unavailable");
            error_response(StatusCode::SERVICE_UNAVAILABLE, TUTOR_UNAVAILABLE)
        }
    }
}
