use async_trait::async_trait;

use crate::domain::{SynthesisRequest, SynthesizedAudio};

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesizedAudio, SpeechSynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesisError {
    #[error("speech api key not configured")]
    NotConfigured,
    #[error("synthesis rejected: {0}")]
    Rejected(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
