mod corpus_source;
mod llm_client;
mod pronunciation_backend;
mod speech_synthesizer;
mod text_splitter;
mod transcription_engine;
mod tutor_backend;

pub use corpus_source::{CorpusSource, CorpusSourceError};
pub use llm_client::{LlmClient, LlmClientError, LlmTokenStream};
pub use pronunciation_backend::{PronunciationBackend, PronunciationBackendError};
pub use speech_synthesizer::{SpeechSynthesisError, SpeechSynthesizer};
pub use text_splitter::TextSplitter;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use tutor_backend::{TutorBackend, TutorBackendError};
