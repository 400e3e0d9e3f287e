use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::CardAttempt;
use crate::presentation::state::AppState;

const NOT_CONFIGURED_EXPLANATION: &str =
    "AI feedback not configured. Add CHUTES_API_KEY to the environment.";
const FAILURE_EXPLANATION: &str = "Something went wrong. Please try again.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default)]
    pub card_id: Option<Value>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub context: Value,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub explanation: String,
}

impl From<FeedbackRequest> for CardAttempt {
    fn from(request: FeedbackRequest) -> Self {
        let card_id = request.card_id.and_then(|id| match id {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => Some(other.to_string()),
        });

        Self {
            card_id,
            card_type: request.card_type.unwrap_or_default(),
            user_answer: request.user_answer.unwrap_or_default(),
            correct_answer: request.correct_answer.unwrap_or_default(),
            context: request.context,
        }
    }
}

/// Explains why a drill answer was wrong. Always answers with an
/// `explanation`, even when the tutor model is unavailable.
#[tracing::instrument(skip(state, request))]
pub async fn feedback_handler(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Response {
    let attempt = CardAttempt::from(request);
    tracing::debug!(card_id = ?attempt.card_id, card_type = %attempt.card_type, "Explaining card attempt");

    let (status, explanation) = match state.tutor_service.explain(&attempt).await {
        Ok(explanation) => (StatusCode::OK, explanation),
        Err(e) if e.is_not_configured() => {
            tracing::warn!("Feedback requested without a configured tutor model");
            (StatusCode::OK, NOT_CONFIGURED_EXPLANATION.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Feedback generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                FAILURE_EXPLANATION.to_string(),
            )
        }
    };

    (status, Json(FeedbackResponse { explanation })).into_response()
}
