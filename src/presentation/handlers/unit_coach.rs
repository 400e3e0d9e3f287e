use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, CoachingUnit};
use crate::presentation::state::AppState;

use super::error_response::completion_failure;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCoachRequest {
    #[serde(default)]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub unit: Option<CoachingUnit>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
pub struct UnitCoachResponse {
    pub content: String,
}

#[tracing::instrument(skip(state, request), fields(unit_id = ?request.unit_id))]
pub async fn unit_coach_handler(
    State(state): State<AppState>,
    Json(request): Json<UnitCoachRequest>,
) -> Response {
    let mut unit = request.unit.unwrap_or_default();
    if unit.id.is_none() {
        unit.id = request.unit_id;
    }

    match state.tutor_service.coach(&unit, request.messages).await {
        Ok(content) => (StatusCode::OK, Json(UnitCoachResponse { content })).into_response(),
        Err(e) => completion_failure(&e),
    }
}
