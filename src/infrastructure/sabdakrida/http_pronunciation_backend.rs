use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{PronunciationBackend, PronunciationBackendError};
use crate::domain::{
    DEFAULT_AUDIO_CONTENT_TYPE, DrawingUpload, PronunciationAttempt, SanskritSpeech,
    SynthesizedAudio,
};
use crate::presentation::config::SabdakridaSettings;

use super::transport::{
    DEFAULT_ASSESSMENT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, content_type_or, describe_send_error,
    endpoint_url, http_client,
};

/// HTTP client for the Sabdakrida pronunciation service.
pub struct HttpPronunciationBackend {
    client: reqwest::Client,
    base_url: String,
    assessment_timeout: Duration,
}

#[derive(Serialize)]
struct FeedbackAudioRequest<'a> {
    text: &'a str,
    style: &'a str,
}

impl HttpPronunciationBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(DEFAULT_REQUEST_TIMEOUT),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            assessment_timeout: DEFAULT_ASSESSMENT_TIMEOUT,
        }
    }

    pub fn from_settings(settings: &SabdakridaSettings) -> Self {
        Self::new(settings.base_url.clone())
            .with_timeouts(settings.timeout(), settings.assessment_timeout())
    }

    /// `request` bounds every call; `assessment` replaces it for scoring
    /// recorded speech.
    pub fn with_timeouts(mut self, request: Duration, assessment: Duration) -> Self {
        self.client = http_client(request);
        self.assessment_timeout = assessment;
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, PronunciationBackendError> {
        endpoint_url(&self.base_url, segments).map_err(PronunciationBackendError::Unavailable)
    }

    async fn send(
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, PronunciationBackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| PronunciationBackendError::Unavailable(describe_send_error(&e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PronunciationBackendError::Upstream { status, body });
        }

        Ok(response)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, PronunciationBackendError> {
        response
            .json()
            .await
            .map_err(|e| PronunciationBackendError::InvalidResponse(e.to_string()))
    }

    async fn read_audio(
        response: reqwest::Response,
    ) -> Result<SynthesizedAudio, PronunciationBackendError> {
        let content_type = content_type_or(&response, DEFAULT_AUDIO_CONTENT_TYPE);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PronunciationBackendError::InvalidResponse(e.to_string()))?;

        Ok(SynthesizedAudio {
            bytes,
            content_type,
        })
    }
}

#[async_trait]
impl PronunciationBackend for HttpPronunciationBackend {
    async fn drills(&self, user_id: &str) -> Result<Value, PronunciationBackendError> {
        let url = self.endpoint(&["profile", user_id, "drills"])?;
        let response = Self::send(self.client.get(url)).await?;

        Self::read_json(response).await
    }

    async fn assess(
        &self,
        attempt: &PronunciationAttempt,
    ) -> Result<Value, PronunciationBackendError> {
        let audio_part = multipart::Part::bytes(attempt.audio.to_vec())
            .file_name("recording.wav")
            .mime_str("audio/wav")
            .map_err(|e| PronunciationBackendError::Unavailable(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .part("audio", audio_part)
            .text("target_text", attempt.target_text.clone())
            .text("user_id", attempt.user_id.clone());

        tracing::debug!(
            audio_bytes = attempt.audio.len(),
            user_id = %attempt.user_id,
            "Sending pronunciation attempt to Sabdakrida"
        );

        let url = self.endpoint(&["session", "mode1"])?;
        let response = Self::send(
            self.client
                .post(url)
                .timeout(self.assessment_timeout)
                .multipart(form),
        )
        .await?;

        Self::read_json(response).await
    }

    async fn speak(
        &self,
        speech: &SanskritSpeech,
    ) -> Result<SynthesizedAudio, PronunciationBackendError> {
        let form = multipart::Form::new()
            .text("text", speech.text.clone())
            .text("style", speech.style.clone());

        let url = self.endpoint(&["tts"])?;
        let response = Self::send(self.client.post(url).multipart(form)).await?;
        let audio = Self::read_audio(response).await?;

        tracing::debug!(bytes = audio.bytes.len(), style = %speech.style, "Sanskrit speech received");
        Ok(audio)
    }

    async fn feedback_audio(
        &self,
        speech: &SanskritSpeech,
    ) -> Result<SynthesizedAudio, PronunciationBackendError> {
        let url = self.endpoint(&["feedback-audio"])?;
        let response = Self::send(self.client.post(url).json(&FeedbackAudioRequest {
            text: &speech.text,
            style: &speech.style,
        }))
        .await?;

        Self::read_audio(response).await
    }

    async fn recognize_drawing(
        &self,
        drawing: &DrawingUpload,
    ) -> Result<Value, PronunciationBackendError> {
        let mut image_part =
            multipart::Part::bytes(drawing.image.to_vec()).file_name(drawing.file_name.clone());
        if let Some(content_type) = &drawing.content_type {
            image_part = image_part
                .mime_str(content_type)
                .map_err(|e| PronunciationBackendError::Unavailable(format!("mime: {}", e)))?;
        }

        tracing::debug!(bytes = drawing.image.len(), "Sending drawing for recognition");

        let url = self.endpoint(&["draw", "recognize"])?;
        let response = Self::send(
            self.client
                .post(url)
                .multipart(multipart::Form::new().part("image", image_part)),
        )
        .await?;

        Self::read_json(response).await
    }
}
