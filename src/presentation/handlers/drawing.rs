use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::PronunciationBackendError;
use crate::domain::DrawingUpload;
use crate::presentation::state::AppState;

use super::error_response::relayed_status;
use super::pronunciation::SABDAKRIDA_START_COMMAND;

/// `predicted` is always present, `null` when nothing was recognized.
#[derive(Debug, Serialize)]
pub struct RecognitionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub predicted: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,
}

impl RecognitionResponse {
    fn failed(status: StatusCode, error: impl Into<String>) -> Response {
        let body = Self {
            error: Some(error.into()),
            predicted: None,
            score: None,
        };
        (status, Json(body)).into_response()
    }
}

/// Takes the `image` field, or `file` when there is no `image`.
async fn read_drawing(mut multipart: Multipart) -> Result<Option<DrawingUpload>, String> {
    let mut image = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().map(str::to_owned);
        let slot = match name.as_deref() {
            Some("image") => &mut image,
            Some("file") => &mut file,
            _ => continue,
        };
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(|e| e.to_string())?;
        if !bytes.is_empty() {
            *slot = Some(DrawingUpload::new(bytes, file_name, content_type));
        }
    }

    Ok(image.or(file))
}

/// Recognizes a hand-drawn Devanagari character.
#[tracing::instrument(skip(state, multipart))]
pub async fn recognize_drawing_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Response {
    let drawing = match read_drawing(multipart).await {
        Ok(Some(drawing)) => drawing,
        Ok(None) => {
            return RecognitionResponse::failed(
                StatusCode::BAD_REQUEST,
                "Missing 'image' file in FormData",
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "Malformed drawing upload");
            return RecognitionResponse::failed(StatusCode::BAD_REQUEST, "Invalid multipart body");
        }
    };

    match state.pronunciation_backend.recognize_drawing(&drawing).await {
        Ok(data) => {
            let body = RecognitionResponse {
                error: None,
                predicted: data.get("predicted").filter(|p| !p.is_null()).cloned(),
                score: data.get("score").filter(|s| !s.is_null()).cloned(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(PronunciationBackendError::Upstream { status, body }) => {
            tracing::warn!(status, body = %body, "Recognition rejected");
            let error = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
                .unwrap_or_else(|| format!("Recognition failed ({})", status));
            RecognitionResponse::failed(relayed_status(status), error)
        }
        Err(e) => {
            tracing::error!(error = %e, "Recognition backend unreachable");
            RecognitionResponse::failed(
                StatusCode::SERVICE_UNAVAILABLE,
                format!(
                    "Recognition unavailable. Is Sabdakrida running? ({})",
                    SABDAKRIDA_START_COMMAND
                ),
            )
        }
    }
}
