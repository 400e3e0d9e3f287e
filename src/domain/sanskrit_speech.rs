pub const NARRATION_STYLE: &str = "narration";
pub const COMMAND_STYLE: &str = "command";

/// Sanskrit text to be voiced by the pronunciation backend in a given
/// delivery style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanskritSpeech {
    pub text: String,
    pub style: String,
}

impl SanskritSpeech {
    pub fn new(text: impl Into<String>, style: Option<String>, default_style: &str) -> Self {
        Self {
            text: text.into(),
            style: style
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default_style.to_string()),
        }
    }
}
