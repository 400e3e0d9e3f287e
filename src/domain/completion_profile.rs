use serde::Deserialize;

/// Model and sampling parameters for one kind of chat completion call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionProfile {
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

impl CompletionProfile {
    pub fn new(model: impl Into<String>, max_tokens: usize, temperature: f32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature,
        }
    }
}
