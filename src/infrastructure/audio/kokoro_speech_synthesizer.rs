use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};
use crate::domain::{DEFAULT_AUDIO_CONTENT_TYPE, SynthesisRequest, SynthesizedAudio};

pub const DEFAULT_SYNTHESIS_URL: &str = "https://chutes-kokoro.chutes.ai/speak";
pub const DEFAULT_VOICE: &str = "hf_alpha";
pub const DEFAULT_SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

/// Text-to-speech through a hosted Kokoro endpoint.
///
/// Deployments differ in whether they expect the fields at the top level or
/// wrapped in `args`, so both shapes are tried in that order.
pub struct KokoroSpeechSynthesizer {
    client: reqwest::Client,
    api_key: Option<String>,
    url: String,
}

#[derive(Serialize)]
struct SpeakFields<'a> {
    text: &'a str,
    voice: &'a str,
    speed: f32,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SpeakPayload<'a> {
    Flat(SpeakFields<'a>),
    Wrapped { args: SpeakFields<'a> },
}

impl KokoroSpeechSynthesizer {
    pub fn new(api_key: Option<String>, url: Option<String>) -> Self {
        Self {
            client: http_client(DEFAULT_SYNTHESIS_TIMEOUT),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            url: url.unwrap_or_else(|| DEFAULT_SYNTHESIS_URL.to_string()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }
}

#[async_trait]
impl SpeechSynthesizer for KokoroSpeechSynthesizer {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesizedAudio, SpeechSynthesisError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(SpeechSynthesisError::NotConfigured)?;

        let voice = if request.voice.is_empty() {
            DEFAULT_VOICE
        } else {
            request.voice.as_str()
        };
        let fields = || SpeakFields {
            text: &request.text,
            voice,
            speed: request.speed,
        };
        let payloads = [
            SpeakPayload::Flat(fields()),
            SpeakPayload::Wrapped { args: fields() },
        ];

        let mut last_error = String::new();
        for payload in &payloads {
            let response = self
                .client
                .post(&self.url)
                .bearer_auth(api_key)
                .json(payload)
                .send()
                .await
                .map_err(|e| SpeechSynthesisError::ApiRequestFailed(request_failure(&e)))?;

            if response.status().is_success() {
                let content_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .filter(|v| !v.is_empty())
                    .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
                    .to_string();
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| SpeechSynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

                tracing::info!(bytes = bytes.len(), voice, "Speech synthesized");
                return Ok(SynthesizedAudio {
                    bytes,
                    content_type,
                });
            }

            let status = response.status();
            last_error = response.text().await.unwrap_or_default();
            tracing::debug!(status = %status, "Kokoro rejected payload shape, trying next");
        }

        tracing::error!(error = %last_error, "Kokoro TTS failed");
        Err(SpeechSynthesisError::Rejected(last_error))
    }
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
