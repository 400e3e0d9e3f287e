use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::domain::{ChatMessage, CompletionProfile};

pub type LlmTokenStream = Pin<Box<dyn Stream<Item = Result<String, LlmClientError>> + Send>>;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        profile: &CompletionProfile,
    ) -> Result<String, LlmClientError>;

    async fn complete_stream(
        &self,
        messages: &[ChatMessage],
        profile: &CompletionProfile,
    ) -> Result<LlmTokenStream, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("chat api key not configured")]
    NotConfigured,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out")]
    TimedOut,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmClientError {
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            Self::RateLimited => Some(429),
            _ => None,
        }
    }
}
