use bytes::Bytes;

pub const DEFAULT_USER_ID: &str = "default";

/// A recorded attempt at reading `target_text` aloud.
#[derive(Debug, Clone, PartialEq)]
pub struct PronunciationAttempt {
    pub audio: Bytes,
    pub target_text: String,
    pub user_id: String,
}

impl PronunciationAttempt {
    pub fn new(audio: Bytes, target_text: String, user_id: Option<String>) -> Self {
        Self {
            audio,
            target_text,
            user_id: user_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        }
    }
}
