use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DrawingUpload, PronunciationAttempt, SanskritSpeech, SynthesizedAudio};

/// The external Sanskrit speech service: drill priorities, recorded-attempt
/// scoring, Sanskrit voicing and handwriting recognition.
#[async_trait]
pub trait PronunciationBackend: Send + Sync {
    async fn drills(&self, user_id: &str) -> Result<Value, PronunciationBackendError>;

    async fn assess(
        &self,
        attempt: &PronunciationAttempt,
    ) -> Result<Value, PronunciationBackendError>;

    async fn speak(
        &self,
        speech: &SanskritSpeech,
    ) -> Result<SynthesizedAudio, PronunciationBackendError>;

    /// Short spoken feedback lines ("again", "well done") in the tutor's voice.
    async fn feedback_audio(
        &self,
        speech: &SanskritSpeech,
    ) -> Result<SynthesizedAudio, PronunciationBackendError>;

    async fn recognize_drawing(
        &self,
        drawing: &DrawingUpload,
    ) -> Result<Value, PronunciationBackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PronunciationBackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("backend returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
