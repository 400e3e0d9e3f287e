use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

pub const DEFAULT_TRANSCRIPTION_URL: &str = "https://chutes-whisper-large-v3.chutes.ai/transcribe";
pub const DEFAULT_TRANSCRIPTION_TIMEOUT: Duration = Duration::from_secs(60);

/// Speech-to-text through a hosted Whisper endpoint that takes base64 audio
/// wrapped in an `args` object.
pub struct WhisperTranscriptionEngine {
    client: reqwest::Client,
    api_key: Option<String>,
    url: String,
}

#[derive(Serialize)]
struct TranscriptionRequest<'a> {
    args: TranscriptionArgs<'a>,
}

#[derive(Serialize)]
struct TranscriptionArgs<'a> {
    audio_b64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

impl WhisperTranscriptionEngine {
    pub fn new(api_key: Option<String>, url: Option<String>) -> Self {
        Self {
            client: http_client(DEFAULT_TRANSCRIPTION_TIMEOUT),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            url: url.unwrap_or_else(|| DEFAULT_TRANSCRIPTION_URL.to_string()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperTranscriptionEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: Option<&str>,
    ) -> Result<String, TranscriptionError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(TranscriptionError::NotConfigured)?;

        let payload = TranscriptionRequest {
            args: TranscriptionArgs {
                audio_b64: STANDARD.encode(audio_data),
                language: language.filter(|l| !l.is_empty()),
            },
        };

        tracing::debug!(
            audio_bytes = audio_data.len(),
            language = ?payload.args.language,
            "Sending audio to Whisper"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(request_failure(&e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::error!(status = %status, body = %body, "Whisper rejected audio");
            return Err(TranscriptionError::Rejected(body));
        }

        let is_plain_text = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("text/plain"));

        let transcript = if is_plain_text {
            response
                .text()
                .await
                .map_err(|e| TranscriptionError::InvalidResponse(format!("body: {}", e)))?
        } else {
            let data: Value = response
                .json()
                .await
                .map_err(|e| TranscriptionError::InvalidResponse(format!("body: {}", e)))?;
            extract_text(&data)
        };

        tracing::info!(chars = transcript.len(), "Whisper transcription completed");

        Ok(transcript.trim().to_string())
    }
}

fn extract_text(data: &Value) -> String {
    data.get("text")
        .and_then(Value::as_str)
        .or_else(|| data.pointer("/args/text").and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("reqwest client build never fails with valid TLS config")
}

fn request_failure(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timed out: {}", e)
    } else {
        format!("request: {}", e)
    }
}
