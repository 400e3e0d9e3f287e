use serde::Serialize;

/// One `chat.completion.chunk` event of an OpenAI-style streaming response.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionChunk {
    pub id: String,
    pub object: &'static str,
    pub created: u64,
    pub model: String,
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChunkChoice {
    pub index: u32,
    pub delta: ChunkDelta,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChunkDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    fn with_delta(id: &str, model: &str, delta: ChunkDelta, finish_reason: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            object: "chat.completion.chunk",
            created: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            model: model.to_string(),
            choices: vec![ChunkChoice {
                index: 0,
                delta,
                finish_reason,
            }],
        }
    }

    pub fn new_start(id: &str, model: &str) -> Self {
        let delta = ChunkDelta {
            role: Some("assistant".to_string()),
            content: None,
        };
        Self::with_delta(id, model, delta, None)
    }

    pub fn new_content(id: &str, model: &str, content: &str) -> Self {
        let delta = ChunkDelta {
            role: None,
            content: Some(content.to_string()),
        };
        Self::with_delta(id, model, delta, None)
    }

    pub fn new_done(id: &str, model: &str) -> Self {
        let delta = ChunkDelta {
            role: None,
            content: None,
        };
        Self::with_delta(id, model, delta, Some("stop".to_string()))
    }
}
