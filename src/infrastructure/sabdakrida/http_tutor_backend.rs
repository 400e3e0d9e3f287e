use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde_json::Value;

use crate::application::ports::{TutorBackend, TutorBackendError};
use crate::domain::{TutorSessionStart, TutorSubmission};
use crate::presentation::config::SabdakridaSettings;

use super::transport::{
    DEFAULT_ASSESSMENT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, describe_send_error, endpoint_url,
    http_client,
};

/// HTTP client for the Sabdakrida tutor conductor (`/tutor/...`).
pub struct HttpTutorBackend {
    client: reqwest::Client,
    base_url: String,
    submission_timeout: Duration,
}

impl HttpTutorBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(DEFAULT_REQUEST_TIMEOUT),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            submission_timeout: DEFAULT_ASSESSMENT_TIMEOUT,
        }
    }

    pub fn from_settings(settings: &SabdakridaSettings) -> Self {
        Self::new(settings.base_url.clone())
            .with_timeouts(settings.timeout(), settings.assessment_timeout())
    }

    pub fn with_timeouts(mut self, request: Duration, submission: Duration) -> Self {
        self.client = http_client(request);
        self.submission_timeout = submission;
        self
    }

    async fn fetch_json(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, TutorBackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| TutorBackendError::Unavailable(describe_send_error(&e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TutorBackendError::Upstream { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| TutorBackendError::InvalidResponse(e.to_string()))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, TutorBackendError> {
        endpoint_url(&self.base_url, segments).map_err(TutorBackendError::Unavailable)
    }
}

#[async_trait]
impl TutorBackend for HttpTutorBackend {
    #[tracing::instrument(skip(self, start), fields(zone = %start.zone_id, level = start.level))]
    async fn start_session(&self, start: &TutorSessionStart) -> Result<Value, TutorBackendError> {
        let form = multipart::Form::new()
            .text("user_id", start.user_id.clone())
            .text("zone_id", start.zone_id.clone())
            .text("level", start.level.to_string());

        let url = self.endpoint(&["tutor", "session", "start"])?;
        self.fetch_json(self.client.post(url).multipart(form)).await
    }

    #[tracing::instrument(skip(self, submission), fields(zone = %submission.zone_id, level = submission.level))]
    async fn submit(&self, submission: &TutorSubmission) -> Result<Value, TutorBackendError> {
        let mut form = multipart::Form::new()
            .text("user_id", submission.user_id.clone())
            .text("zone_id", submission.zone_id.clone())
            .text("level", submission.level.to_string())
            .text("user_input", submission.user_input.clone());

        if let Some(audio) = &submission.audio {
            let audio_part = multipart::Part::bytes(audio.to_vec())
                .file_name("recording.wav")
                .mime_str("audio/wav")
                .map_err(|e| TutorBackendError::Unavailable(format!("mime: {}", e)))?;
            form = form.part("audio", audio_part);
        }

        let url = self.endpoint(&["tutor", "session", "submit"])?;
        self.fetch_json(
            self.client
                .post(url)
                .timeout(self.submission_timeout)
                .multipart(form),
        )
        .await
    }

    async fn profile(&self, user_id: &str) -> Result<Value, TutorBackendError> {
        let url = self.endpoint(&["tutor", "profile", user_id])?;
        self.fetch_json(self.client.get(url)).await
    }

    async fn pathway(&self, zone_id: &str) -> Result<Value, TutorBackendError> {
        let url = self.endpoint(&["tutor", "pathway", zone_id])?;
        self.fetch_json(self.client.get(url)).await
    }
}
