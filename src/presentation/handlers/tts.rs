use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::application::ports::SpeechSynthesisError;
use crate::domain::SynthesisRequest;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::transcribe::first_present;

#[tracing::instrument(skip(state, body))]
pub async fn tts_handler(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let text = first_present(&body, &["/text", "/args/text"])
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    if text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'text'");
    }

    let speed = first_present(&body, &["/speed", "/args/speed"])
        .and_then(Value::as_f64)
        .map(|s| s as f32);
    let voice = first_present(&body, &["/voice", "/args/voice"])
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .unwrap_or(state.settings.speech.default_voice.as_str())
        .to_string();

    let request = SynthesisRequest::new(text.to_string(), voice, speed);
    tracing::debug!(chars = request.text.chars().count(), voice = %request.voice, speed = request.speed, "Synthesizing speech");

    match state.speech_synthesizer.synthesize(&request).await {
        Ok(audio) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, audio.content_type)],
            audio.bytes,
        )
            .into_response(),
        Err(SpeechSynthesisError::NotConfigured) => {
            error_response(StatusCode::NOT_IMPLEMENTED, "CHUTES_API_KEY not configured")
        }
        Err(SpeechSynthesisError::Rejected(reason)) => {
            error_response(StatusCode::BAD_REQUEST, format!("TTS failed: {}", reason))
        }
        Err(e) => {
            tracing::error!(error = %e, "Speech synthesis failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "TTS synthesis failed")
        }
    }
}
