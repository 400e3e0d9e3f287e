use std::sync::Arc;

use tokio::net::TcpListener;

use pathshala::application::ports::LlmClient;
use pathshala::application::services::{RetrievalService, TutorProfiles, TutorService};
use pathshala::infrastructure::audio::{KokoroSpeechSynthesizer, WhisperTranscriptionEngine};
use pathshala::infrastructure::corpus::FileCorpusSource;
use pathshala::infrastructure::llm::ChatCompletionsClient;
use pathshala::infrastructure::observability::{TracingConfig, init_tracing};
use pathshala::infrastructure::sabdakrida::{HttpPronunciationBackend, HttpTutorBackend};
use pathshala::infrastructure::text_processing::ParagraphSplitter;
use pathshala::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let corpus_source = Arc::new(FileCorpusSource::new(&settings.retrieval.corpus_path));
    let text_splitter = Arc::new(ParagraphSplitter::new(settings.retrieval.chunk_size));
    let retrieval_service = Arc::new(RetrievalService::new(
        corpus_source,
        text_splitter,
        settings.retrieval.top_k,
    ));

    let chat_client = ChatCompletionsClient::from_settings(&settings.llm);
    if !chat_client.is_configured() {
        tracing::warn!("CHUTES_API_KEY not set; tutor endpoints will report not configured");
    }
    let llm_client: Arc<dyn LlmClient> = Arc::new(chat_client);

    let tutor_service = Arc::new(TutorService::new(
        llm_client,
        Arc::clone(&retrieval_service),
        TutorProfiles {
            chat: settings.llm.chat.clone(),
            ask: settings.llm.ask.clone(),
            feedback: settings.llm.feedback.clone(),
            tutor: settings.llm.tutor.clone(),
            coach: settings.llm.coach.clone(),
        },
        settings.retrieval.coach_top_k,
    ));

    let transcription_engine = Arc::new(
        WhisperTranscriptionEngine::new(
            settings.speech.api_key.clone(),
            Some(settings.speech.transcription_url.clone()),
        )
        .with_timeout(settings.speech.timeout()),
    );
    let speech_synthesizer = Arc::new(
        KokoroSpeechSynthesizer::new(
            settings.speech.api_key.clone(),
            Some(settings.speech.synthesis_url.clone()),
        )
        .with_timeout(settings.speech.timeout()),
    );
    let pronunciation_backend = Arc::new(HttpPronunciationBackend::from_settings(
        &settings.sabdakrida,
    ));
    let tutor_backend = Arc::new(HttpTutorBackend::from_settings(&settings.sabdakrida));

    tracing::info!(
        environment = %environment,
        corpus = %settings.retrieval.corpus_path,
        chunk_size = settings.retrieval.chunk_size,
        top_k = settings.retrieval.top_k,
        chat_model = tutor_service.chat_model(),
        sabdakrida = %settings.sabdakrida.base_url,
        "Configuration loaded"
    );

    let addr = settings.bind_address();

    let state = AppState {
        retrieval_service,
        tutor_service,
        transcription_engine,
        speech_synthesizer,
        pronunciation_backend,
        tutor_backend,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
