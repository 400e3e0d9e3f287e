use std::convert::Infallible;
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures::stream::StreamExt;
use serde::Deserialize;

use crate::domain::ChatMessage;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::{completion_failure, error_response};
use super::openai_types::ChatCompletionChunk;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// Streams a tutor chat reply as server-sent `chat.completion.chunk` events
/// terminated by `[DONE]`.
#[tracing::instrument(skip(state, request), fields(messages = request.messages.len()))]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    if request.messages.is_empty() {
        tracing::warn!("Chat request without messages");
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing 'messages' array with at least one message",
        );
    }

    if let Some(last) = request.messages.last() {
        tracing::debug!(prompt = %sanitize_prompt(&last.content), "Processing chat");
    }

    let token_stream = match state
        .tutor_service
        .stream_chat(request.messages, request.system_prompt.as_deref())
        .await
    {
        Ok(stream) => stream,
        Err(e) => return completion_failure(&e),
    };

    let chunk_id = format!("chatcmpl-{}", uuid::Uuid::new_v4());
    let model = state.tutor_service.chat_model().to_string();
    let keep_alive_seconds = state.settings.llm.sse_keep_alive_seconds.max(1);

    let sse_stream = async_stream::stream! {
        let start_chunk = ChatCompletionChunk::new_start(&chunk_id, &model);
        let start_json = serde_json::to_string(&start_chunk).unwrap_or_default();
        yield Ok::<_, Infallible>(Event::default().data(start_json));

        let mut token_stream = token_stream;
        while let Some(token_result) = token_stream.next().await {
            match token_result {
                Ok(token) => {
                    let content_chunk = ChatCompletionChunk::new_content(&chunk_id, &model, &token);
                    let content_json = serde_json::to_string(&content_chunk).unwrap_or_default();
                    yield Ok(Event::default().data(content_json));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Stream token error");
                    break;
                }
            }
        }

        let done_chunk = ChatCompletionChunk::new_done(&chunk_id, &model);
        let done_json = serde_json::to_string(&done_chunk).unwrap_or_default();
        yield Ok(Event::default().data(done_json));
        yield Ok(Event::default().data("[DONE]"));
    };

    Sse::new(sse_stream)
        .keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(keep_alive_seconds))
                .text("keep-alive"),
        )
        .into_response()
}
