use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::PronunciationBackendError;
use crate::domain::{COMMAND_STYLE, NARRATION_STYLE, SanskritSpeech, SynthesizedAudio};
use crate::presentation::state::AppState;

use super::error_response::{error_response, relayed_status};
use super::pronunciation::SABDAKRIDA_START_COMMAND;

/// Loosely typed so that a non-string `text` is a 400 rather than a body
/// rejection.
#[derive(Deserialize)]
pub struct SanskritSpeechRequest {
    #[serde(default)]
    pub text: Value,
    #[serde(default)]
    pub style: Value,
}

impl SanskritSpeechRequest {
    fn text(&self) -> Option<&str> {
        self.text.as_str()
    }

    fn style(&self) -> Option<String> {
        self.style.as_str().map(str::to_owned)
    }
}

fn audio_response(audio: SynthesizedAudio) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, audio.content_type)],
        audio.bytes,
    )
        .into_response()
}

/// Voices Sanskrit text through the pronunciation backend.
#[tracing::instrument(skip(state, request))]
pub async fn sanskrit_tts_handler(
    State(state): State<AppState>,
    Json(request): Json<SanskritSpeechRequest>,
) -> Response {
    let text = request.text().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'text'");
    }

    let speech = SanskritSpeech::new(text, request.style(), NARRATION_STYLE);

    match state.pronunciation_backend.speak(&speech).await {
        Ok(audio) => audio_response(audio),
        Err(PronunciationBackendError::Upstream { status, body }) => {
            tracing::warn!(status, body = %body, "Sanskrit TTS rejected");
            error_response(relayed_status(status), format!("TTS failed: {}", body))
        }
        Err(e) => {
            tracing::error!(error = %e, "Sanskrit TTS unreachable");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                format!(
                    "Sanskrit TTS unavailable. Is the Sabdakrida backend running? ({})",
                    SABDAKRIDA_START_COMMAND
                ),
            )
        }
    }
}

/// Short spoken feedback in the tutor's voice.
#[tracing::instrument(skip(state, request))]
pub async fn feedback_audio_handler(
    State(state): State<AppState>,
    Json(request): Json<SanskritSpeechRequest>,
) -> Response {
    let Some(text) = request.text().filter(|t| !t.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'text'");
    };

    let speech = SanskritSpeech::new(text, request.style(), COMMAND_STYLE);

    match state.pronunciation_backend.feedback_audio(&speech).await {
        Ok(audio) => audio_response(audio),
        Err(PronunciationBackendError::Upstream { status, body }) => {
            tracing::warn!(status, body = %body, "Feedback audio rejected");
            let message = if body.is_empty() {
                "Feedback TTS failed".to_string()
            } else {
                body
            };
            error_response(relayed_status(status), message)
        }
        Err(e) => {
            tracing::error!(error = %e, "Feedback audio unreachable");
            error_response(StatusCode::SERVICE_UNAVAILABLE, "Feedback audio unavailable")
        }
    }
}
