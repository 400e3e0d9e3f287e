use std::time::Duration;

use async_trait::async_trait;
use futures::stream::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError, LlmTokenStream};
use crate::domain::{ChatMessage, CompletionProfile};
use crate::presentation::config::LlmSettings;

pub const DEFAULT_CHAT_BASE_URL: &str = "https://llm.chutes.ai/v1";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    completion_timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: usize,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Deserialize)]
struct ChunkChoice {
    delta: ChunkDelta,
}

#[derive(Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug)]
enum SseData {
    Token(String),
    Done,
    Ignore,
}

impl ChatCompletionsClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            completion_timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }

    pub fn from_settings(settings: &LlmSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.api_key.clone())
            .with_completion_timeout(settings.timeout())
    }

    /// Bounds a whole buffered completion. Streams are only bounded while
    /// connecting, since a long reply keeps the body open.
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send(
        &self,
        messages: &[ChatMessage],
        profile: &CompletionProfile,
        stream: Option<bool>,
    ) -> Result<reqwest::Response, LlmClientError> {
        let api_key = self.api_key.as_ref().ok_or(LlmClientError::NotConfigured)?;

        let request_body = ChatCompletionRequest {
            model: &profile.model,
            messages,
            max_tokens: profile.max_tokens,
            temperature: profile.temperature,
            stream,
        };

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body);
        if stream.is_none() {
            request = request.timeout(self.completion_timeout);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!(timeout = ?self.completion_timeout, "Chat completion timed out");
                LlmClientError::TimedOut
            } else {
                LlmClientError::ApiRequestFailed(e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, "Chat completion upstream error");
            return Err(LlmClientError::UpstreamStatus { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    #[tracing::instrument(skip(self, messages, profile), fields(model = %profile.model))]
    async fn complete(
        &self,
        messages: &[ChatMessage],
        profile: &CompletionProfile,
    ) -> Result<String, LlmClientError> {
        let response = self.send(messages, profile, None).await?;

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmClientError::TimedOut
            } else {
                LlmClientError::InvalidResponse(e.to_string())
            }
        })?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default())
    }

    #[tracing::instrument(skip(self, messages, profile), fields(model = %profile.model))]
    async fn complete_stream(
        &self,
        messages: &[ChatMessage],
        profile: &CompletionProfile,
    ) -> Result<LlmTokenStream, LlmClientError> {
        let response = self.send(messages, profile, Some(true)).await?;
        let mut bytes = Box::pin(response.bytes_stream());

        let token_stream = async_stream::stream! {
            // Network chunks may split lines and multi-byte characters alike.
            let mut pending: Vec<u8> = Vec::new();

            while let Some(chunk) = bytes.next().await {
                match chunk {
                    Ok(chunk) => {
                        pending.extend_from_slice(&chunk);
                        while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
                            let line: Vec<u8> = pending.drain(..=pos).collect();
                            match parse_sse_line(&String::from_utf8_lossy(&line)) {
                                SseData::Token(token) => yield Ok(token),
                                SseData::Done => return,
                                SseData::Ignore => {}
                            }
                        }
                    }
                    Err(e) => {
                        yield Err(LlmClientError::ApiRequestFailed(e.to_string()));
                        return;
                    }
                }
            }

            if let SseData::Token(token) = parse_sse_line(&String::from_utf8_lossy(&pending)) {
                yield Ok(token);
            }
        };

        Ok(Box::pin(token_stream))
    }
}

fn parse_sse_line(line: &str) -> SseData {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(data) = line.strip_prefix("data:") else {
        return SseData::Ignore;
    };
    let data = data.trim_start();

    if data == "[DONE]" {
        return SseData::Done;
    }

    serde_json::from_str::<ChatCompletionChunk>(data)
        .ok()
        .and_then(|chunk| chunk.choices.into_iter().next())
        .and_then(|choice| choice.delta.content)
        .filter(|content| !content.is_empty())
        .map_or(SseData::Ignore, SseData::Token)
}

