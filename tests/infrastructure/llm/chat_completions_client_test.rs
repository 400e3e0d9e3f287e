use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use futures::StreamExt;
use tokio::sync::oneshot;

use pathshala::application::ports::{LlmClient, LlmClientError};
use pathshala::domain::{ChatMessage, CompletionProfile};
use pathshala::infrastructure::llm::ChatCompletionsClient;

use crate::helpers::start_mock_server;

const TEST_KEY: &str = "test-key";

const STREAM_BODY: &str = "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n\
data: {\"choices\":[{\"delta\":{\"content\":\"Nama\"}}]}\n\n\
: keep-alive\n\n\
data: {\"choices\":[{\"delta\":{\"content\":\"ste\"}}]}\n\n\
data: [DONE]\n\n\
data: {\"choices\":[{\"delta\":{\"content\":\"ignored\"}}]}\n\n";

fn profile() -> CompletionProfile {
    CompletionProfile::new("test-model", 64, 0.2)
}

fn messages() -> Vec<ChatMessage> {
    vec![ChatMessage::user("Greet me in Sanskrit")]
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TEST_KEY))
}

async fn start_completion_server(
    status: u16,
    body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap| async move {
            if !authorized(&headers) {
                return (StatusCode::UNAUTHORIZED, "missing key").into_response();
            }
            let status = StatusCode::from_u16(status).unwrap();
            (status, body).into_response()
        }),
    );

    let (base_url, shutdown_tx) = start_mock_server(app).await;
    (format!("{}/v1", base_url), shutdown_tx)
}

#[tokio::test]
async fn given_completion_reply_when_completing_then_returns_first_choice() {
    let (base_url, shutdown_tx) = start_completion_server(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"Namaste"}}]}"#,
    )
    .await;
    let client = ChatCompletionsClient::new(base_url, Some(TEST_KEY.to_string()));

    let result = client.complete(&messages(), &profile()).await;

    assert_eq!(result.unwrap(), "Namaste");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_reply_without_choices_when_completing_then_returns_empty_text() {
    let (base_url, shutdown_tx) = start_completion_server(200, r#"{"choices":[]}"#).await;
    let client = ChatCompletionsClient::new(base_url, Some(TEST_KEY.to_string()));

    let result = client.complete(&messages(), &profile()).await;

    assert_eq!(result.unwrap(), "");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_upstream_status() {
    let (base_url, shutdown_tx) = start_completion_server(500, "boom").await;
    let client = ChatCompletionsClient::new(base_url, Some(TEST_KEY.to_string()));

    let result = client.complete(&messages(), &profile()).await;

    match result {
        Err(LlmClientError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_when_completing_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_completion_server(429, "slow down").await;
    let client = ChatCompletionsClient::new(base_url, Some(TEST_KEY.to_string()));

    let result = client.complete(&messages(), &profile()).await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_api_key_when_completing_then_returns_not_configured() {
    let client = ChatCompletionsClient::new("http://127.0.0.1:9/v1", Some("  ".to_string()));

    assert!(!client.is_configured());
    let result = client.complete(&messages(), &profile()).await;

    assert!(matches!(result, Err(LlmClientError::NotConfigured)));
}

#[tokio::test]
async fn given_sse_reply_when_streaming_then_yields_tokens_until_done() {
    let (base_url, shutdown_tx) = start_completion_server(200, STREAM_BODY).await;
    let client = ChatCompletionsClient::new(base_url, Some(TEST_KEY.to_string()));

    let stream = client.complete_stream(&messages(), &profile()).await.unwrap();
    let tokens: Vec<String> = stream.map(|token| token.unwrap()).collect().await;

    assert_eq!(tokens, vec!["Nama", "ste"]);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_streaming_then_fails_before_streaming() {
    let (base_url, shutdown_tx) = start_completion_server(503, "overloaded").await;
    let client = ChatCompletionsClient::new(base_url, Some(TEST_KEY.to_string()));

    let result = client.complete_stream(&messages(), &profile()).await;

    assert_eq!(result.err().and_then(|e| e.upstream_status()), Some(503));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_stalled_server_when_completing_then_times_out() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let client = ChatCompletionsClient::new(format!("{}/v1", base_url), Some(TEST_KEY.to_string()))
        .with_completion_timeout(Duration::from_millis(200));

    let result = client.complete(&messages(), &profile()).await;

    assert!(matches!(result, Err(LlmClientError::TimedOut)));
    shutdown_tx.send(()).ok();
}
