mod kokoro_speech_synthesizer;
mod whisper_transcription_engine;

pub use kokoro_speech_synthesizer::{
    DEFAULT_SYNTHESIS_TIMEOUT, DEFAULT_SYNTHESIS_URL, DEFAULT_VOICE, KokoroSpeechSynthesizer,
};
pub use whisper_transcription_engine::{
    DEFAULT_TRANSCRIPTION_TIMEOUT, DEFAULT_TRANSCRIPTION_URL, WhisperTranscriptionEngine,
};
