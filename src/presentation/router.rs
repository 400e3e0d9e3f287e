use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, chat_handler, drills_handler, feedback_audio_handler, feedback_handler,
    health_handler, rag_handler, recognize_drawing_handler, sanskrit_tts_handler,
    session_handler, session_start_handler, session_submit_handler, transcribe_handler,
    tts_handler, tutor_handler, tutor_pathway_handler, tutor_profile_handler, unit_coach_handler,
};
use crate::presentation::state::AppState;

/// Recorded audio arrives base64-encoded or as multipart uploads.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/rag", post(rag_handler))
        .route("/api/rag-ask", post(ask_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/tutor", post(tutor_handler))
        .route("/api/unit-coach", post(unit_coach_handler))
        .route("/api/feedback", post(feedback_handler))
        .route("/api/transcribe", post(transcribe_handler))
        .route("/api/tts", post(tts_handler))
        .route("/api/sabdakrida/drills", get(drills_handler))
        .route("/api/sabdakrida/session", post(session_handler))
        .route("/api/sabdakrida/tts", post(sanskrit_tts_handler))
        .route("/api/sabdakrida/feedback-audio", post(feedback_audio_handler))
        .route("/api/sabdakrida/draw/recognize", post(recognize_drawing_handler))
        .route("/api/tutor/session/start", post(session_start_handler))
        .route("/api/tutor/session/submit", post(session_submit_handler))
        .route("/api/tutor/profile/{user_id}", get(tutor_profile_handler))
        .route("/api/tutor/pathway/{zone_id}", get(tutor_pathway_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
