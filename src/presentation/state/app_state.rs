use std::sync::Arc;

use crate::application::ports::{
    PronunciationBackend, SpeechSynthesizer, TranscriptionEngine, TutorBackend,
};
use crate::application::services::{RetrievalService, TutorService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub retrieval_service: Arc<RetrievalService>,
    pub tutor_service: Arc<TutorService>,
    pub transcription_engine: Arc<dyn TranscriptionEngine>,
    pub speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    pub pronunciation_backend: Arc<dyn PronunciationBackend>,
    pub tutor_backend: Arc<dyn TutorBackend>,
    pub settings: Settings,
}
