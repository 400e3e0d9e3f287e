use std::time::Duration;

use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::json;
use tokio::sync::oneshot;

use pathshala::application::ports::{TutorBackend, TutorBackendError};
use pathshala::domain::{TutorSessionStart, TutorSubmission};
use pathshala::infrastructure::sabdakrida::HttpTutorBackend;

use crate::helpers::{start_mock_server, unreachable_url};

async fn echo_form(mut multipart: Multipart) -> impl IntoResponse {
    let mut fields = serde_json::Map::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let value = match field.file_name() {
            Some(file_name) => {
                let file_name = file_name.to_string();
                let len = field.bytes().await.unwrap().len();
                json!({ "file_name": file_name, "bytes": len })
            }
            None => json!(field.text().await.unwrap()),
        };
        fields.insert(name, value);
    }
    Json(serde_json::Value::Object(fields))
}

async fn start_mock_tutor_server() -> (String, oneshot::Sender<()>) {
    let app = Router::new()
        .route("/tutor/session/start", post(echo_form))
        .route(
            "/tutor/session/submit",
            post(|multipart: Multipart| async move {
                tokio::time::sleep(Duration::from_millis(400)).await;
                echo_form(multipart).await
            }),
        )
        .route(
            "/tutor/profile/{user_id}",
            get(|Path(user_id): Path<String>| async move {
                if user_id == "ghost" {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "detail": "unknown learner" })),
                    )
                        .into_response();
                }
                Json(json!({ "user_id": user_id, "zones": {} })).into_response()
            }),
        )
        .route(
            "/tutor/pathway/{zone_id}",
            get(|Path(zone_id): Path<String>| async move {
                Json(json!({ "zone_id": zone_id, "levels": [] }))
            }),
        );

    start_mock_server(app).await
}

#[tokio::test]
async fn given_start_when_opening_session_then_posts_form_fields() {
    let (base_url, shutdown_tx) = start_mock_tutor_server().await;
    let backend = HttpTutorBackend::new(base_url);

    let echoed = backend
        .start_session(&TutorSessionStart::new(None, "sandhi", 3))
        .await
        .unwrap();

    assert_eq!(echoed, json!({ "user_id": "default", "zone_id": "sandhi", "level": "3" }));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_spoken_answer_when_submitting_then_attaches_recording() {
    let (base_url, shutdown_tx) = start_mock_tutor_server().await;
    let backend = HttpTutorBackend::new(base_url);
    let submission = TutorSubmission::new(
        Some("arjuna".to_string()),
        "phonetics",
        2,
        Some("a".to_string()),
        Some(Bytes::from_static(b"RIFF")),
    );

    let echoed = backend.submit(&submission).await.unwrap();

    assert_eq!(echoed["user_id"], "arjuna");
    assert_eq!(echoed["user_input"], "a");
    assert_eq!(echoed["audio"]["file_name"], "recording.wav");
    assert_eq!(echoed["audio"]["bytes"], 4);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_typed_answer_when_submitting_then_sends_no_audio_part() {
    let (base_url, shutdown_tx) = start_mock_tutor_server().await;
    let backend = HttpTutorBackend::new(base_url);
    let submission = TutorSubmission::new(None, "roots", 1, Some("gam".to_string()), None);

    let echoed = backend.submit(&submission).await.unwrap();

    assert_eq!(echoed["user_input"], "gam");
    assert!(echoed.get("audio").is_none());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_assessment_when_submitting_then_uses_longer_submission_timeout() {
    let (base_url, shutdown_tx) = start_mock_tutor_server().await;
    let patient = HttpTutorBackend::new(base_url.clone())
        .with_timeouts(Duration::from_millis(100), Duration::from_secs(5));
    let impatient = HttpTutorBackend::new(base_url)
        .with_timeouts(Duration::from_secs(5), Duration::from_millis(100));
    let submission = TutorSubmission::new(None, "roots", 1, None, None);

    assert!(patient.submit(&submission).await.is_ok());
    assert!(matches!(
        impatient.submit(&submission).await,
        Err(TutorBackendError::Unavailable(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unknown_learner_when_fetching_profile_then_returns_upstream_body() {
    let (base_url, shutdown_tx) = start_mock_tutor_server().await;
    let backend = HttpTutorBackend::new(base_url);

    match backend.profile("ghost").await {
        Err(TutorBackendError::Upstream { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("unknown learner"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_zone_when_fetching_pathway_then_returns_backend_json() {
    let (base_url, shutdown_tx) = start_mock_tutor_server().await;
    let backend = HttpTutorBackend::new(base_url);

    let pathway = backend.pathway("sandhi").await.unwrap();

    assert_eq!(pathway["zone_id"], "sandhi");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_backend_down_when_fetching_profile_then_returns_unavailable() {
    let backend = HttpTutorBackend::new(unreachable_url().await);

    let result = backend.profile("arjuna").await;

    assert!(matches!(result, Err(TutorBackendError::Unavailable(_))));
}
