use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{TutorSessionStart, TutorSubmission};

/// The curriculum conductor that runs zone sessions and keeps learner
/// profiles.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    async fn start_session(&self, start: &TutorSessionStart) -> Result<Value, TutorBackendError>;

    async fn submit(&self, submission: &TutorSubmission) -> Result<Value, TutorBackendError>;

    async fn profile(&self, user_id: &str) -> Result<Value, TutorBackendError>;

    async fn pathway(&self, zone_id: &str) -> Result<Value, TutorBackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TutorBackendError {
    #[error("tutor backend unavailable: {0}")]
    Unavailable(String),
    #[error("tutor backend returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
