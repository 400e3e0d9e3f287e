use std::time::{Duration, Instant};

use axum::extract::{Multipart, Path};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::{Value, json};
use tokio::sync::oneshot;

use pathshala::application::ports::{PronunciationBackend, PronunciationBackendError};
use pathshala::domain::{
    COMMAND_STYLE, DrawingUpload, NARRATION_STYLE, PronunciationAttempt, SanskritSpeech,
};
use pathshala::infrastructure::sabdakrida::HttpPronunciationBackend;

use crate::helpers::{start_mock_server, unreachable_url};

async fn echo_session(mut multipart: Multipart) -> impl IntoResponse {
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

/// Answers with `text|style` as audio so the caller can see what was sent.
async fn speak_back(mut multipart: Multipart) -> impl IntoResponse {
    let mut text = String::new();
    let mut style = String::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "text" => text = field.text().await.unwrap(),
            "style" => style = field.text().await.unwrap(),
            _ => {}
        }
    }
    ([(header::CONTENT_TYPE, "audio/wav")], format!("{}|{}", text, style))
}

async fn feedback_back(Json(request): Json<Value>) -> axum::response::Response {
    let text = request["text"].as_str().unwrap_or_default().to_string();
    if text == "fail" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let style = request["style"].as_str().unwrap_or_default();
    (
        [(header::CONTENT_TYPE, "audio/mpeg")],
        format!("{}|{}", text, style),
    )
        .into_response()
}

async fn start_mock_sabdakrida_server() -> (String, oneshot::Sender<()>) {
    let app = Router::new()
        .route(
            "/profile/{user_id}/drills",
            get(|Path(user_id): Path<String>| async move {
                if user_id == "ghost" {
                    return (StatusCode::NOT_FOUND, "no such learner").into_response();
                }
                if user_id == "sloth" {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                }
                Json(json!({ "user_id": user_id, "drills": ["retroflex"] })).into_response()
            }),
        )
        .route("/session/mode1", post(echo_session))
        .route("/tts", post(speak_back))
        .route("/feedback-audio", post(feedback_back))
        .route("/draw/recognize", post(echo_session));

    start_mock_server(app).await
}

fn attempt() -> PronunciationAttempt {
    PronunciationAttempt::new(
        Bytes::from_static(b"RIFF0000"),
        "namaste".to_string(),
        Some("arjuna".to_string()),
    )
}

#[tokio::test]
async fn given_known_user_when_fetching_drills_then_returns_backend_json() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(format!("{}/", base_url));

    let drills = backend.drills("arjuna").await.unwrap();

    assert_eq!(drills["user_id"], "arjuna");
    assert_eq!(drills["drills"][0], "retroflex");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_user_id_with_reserved_characters_when_fetching_drills_then_encodes_segment() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url);

    let drills = backend.drills("a/b c").await.unwrap();

    assert_eq!(drills["user_id"], "a/b c");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unknown_user_when_fetching_drills_then_returns_upstream_error() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url);

    let result = backend.drills("ghost").await;

    match result {
        Err(PronunciationBackendError::Upstream { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such learner");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_backend_down_when_fetching_drills_then_returns_unavailable() {
    let backend = HttpPronunciationBackend::new(unreachable_url().await);

    let result = backend.drills("arjuna").await;

    assert!(matches!(result, Err(PronunciationBackendError::Unavailable(_))));
}

#[tokio::test]
async fn given_attempt_when_assessing_then_posts_multipart_form() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url);

    let echoed = backend.assess(&attempt()).await.unwrap();

    assert_eq!(echoed["audio"]["file_name"], "recording.wav");
    assert_eq!(echoed["audio"]["bytes"], 8);
    assert_eq!(echoed["target_text"], "namaste");
    assert_eq!(echoed["user_id"], "arjuna");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_backend_down_when_assessing_then_returns_unavailable() {
    let backend = HttpPronunciationBackend::new(unreachable_url().await);

    let result = backend.assess(&attempt()).await;

    assert!(matches!(result, Err(PronunciationBackendError::Unavailable(_))));
}

#[tokio::test]
async fn given_hung_backend_when_fetching_drills_then_gives_up_after_timeout() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url)
        .with_timeouts(Duration::from_millis(200), Duration::from_millis(200));

    let started = Instant::now();
    let result = backend.drills("sloth").await;

    assert!(started.elapsed() < Duration::from_secs(3));
    match result {
        Err(PronunciationBackendError::Unavailable(reason)) => {
            assert!(reason.contains("timed out"), "{}", reason);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_text_when_speaking_then_posts_text_and_style_form() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url);

    let audio = backend
        .speak(&SanskritSpeech::new("namaste", None, NARRATION_STYLE))
        .await
        .unwrap();

    assert_eq!(audio.content_type, "audio/wav");
    assert_eq!(&audio.bytes[..], b"namaste|narration");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_text_when_requesting_feedback_audio_then_posts_json() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url);

    let audio = backend
        .feedback_audio(&SanskritSpeech::new("punar", None, COMMAND_STYLE))
        .await
        .unwrap();

    assert_eq!(audio.content_type, "audio/mpeg");
    assert_eq!(&audio.bytes[..], b"punar|command");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_backend_failure_when_requesting_feedback_audio_then_returns_upstream_error() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url);

    let result = backend
        .feedback_audio(&SanskritSpeech::new("fail", None, COMMAND_STYLE))
        .await;

    assert!(matches!(
        result,
        Err(PronunciationBackendError::Upstream { status: 500, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_drawing_when_recognizing_then_uploads_image_part() {
    let (base_url, shutdown_tx) = start_mock_sabdakrida_server().await;
    let backend = HttpPronunciationBackend::new(base_url);
    let drawing = DrawingUpload::new(
        Bytes::from_static(b"PNG"),
        Some("glyph.png".to_string()),
        Some("image/png".to_string()),
    );

    let echoed = backend.recognize_drawing(&drawing).await.unwrap();

    assert_eq!(echoed["image"]["file_name"], "glyph.png");
    assert_eq!(echoed["image"]["bytes"], 3);
    shutdown_tx.send(()).ok();
}
