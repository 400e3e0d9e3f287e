use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::TranscriptionError;
use crate::presentation::state::AppState;

use super::error_response::error_response;

const AUDIO_FIELDS: [&str; 4] = [
    "/audio_b64",
    "/args/audio_b64",
    "/audio_base64",
    "/args/audio_base64",
];
const LANGUAGE_FIELDS: [&str; 2] = ["/language", "/args/language"];

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// First non-null value among `pointers`.
pub(super) fn first_present<'a>(body: &'a Value, pointers: &[&str]) -> Option<&'a Value> {
    pointers
        .iter()
        .filter_map(|pointer| body.pointer(pointer))
        .find(|value| !value.is_null())
}

#[tracing::instrument(skip(state, body))]
pub async fn transcribe_handler(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(audio_b64) = first_present(&body, &AUDIO_FIELDS).and_then(Value::as_str) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing or invalid 'audio_b64' in request body",
        );
    };

    let audio_b64: String = audio_b64.chars().filter(|c| !c.is_whitespace()).collect();
    if audio_b64.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing or invalid 'audio_b64' in request body",
        );
    }

    let audio = match STANDARD.decode(audio_b64.as_bytes()) {
        Ok(audio) => audio,
        Err(e) => {
            tracing::warn!(error = %e, "Audio payload is not valid base64");
            return error_response(
                StatusCode::BAD_REQUEST,
                "Missing or invalid 'audio_b64' in request body",
            );
        }
    };

    let language = first_present(&body, &LANGUAGE_FIELDS).and_then(Value::as_str);

    match state
        .transcription_engine
        .transcribe(&audio, language)
        .await
    {
        Ok(text) => (StatusCode::OK, Json(TranscribeResponse { text })).into_response(),
        Err(TranscriptionError::NotConfigured) => {
            error_response(StatusCode::NOT_IMPLEMENTED, "CHUTES_API_KEY not configured")
        }
        Err(TranscriptionError::Rejected(reason)) => error_response(
            StatusCode::BAD_REQUEST,
            format!("Transcription failed: {}", reason),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Transcription failed")
        }
    }
}
