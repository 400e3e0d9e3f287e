use bytes::Bytes;

pub const MIN_SPEECH_SPEED: f32 = 0.5;
pub const MAX_SPEECH_SPEED: f32 = 1.5;
pub const DEFAULT_SPEECH_SPEED: f32 = 0.85;
pub const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/wav";

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub speed: f32,
}

impl SynthesisRequest {
    /// Speed falls back to the default when absent and is clamped to the
    /// range the synthesizer accepts.
    pub fn new(text: String, voice: String, speed: Option<f32>) -> Self {
        let speed = speed
            .filter(|s| s.is_finite())
            .unwrap_or(DEFAULT_SPEECH_SPEED)
            .clamp(MIN_SPEECH_SPEED, MAX_SPEECH_SPEED);

        Self { text, voice, speed }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub bytes: Bytes,
    pub content_type: String,
}
