use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::CompletionProfile;
use crate::infrastructure::audio::{DEFAULT_SYNTHESIS_URL, DEFAULT_TRANSCRIPTION_URL, DEFAULT_VOICE};
use crate::infrastructure::corpus::DEFAULT_CORPUS_PATH;
use crate::infrastructure::llm::DEFAULT_CHAT_BASE_URL;
use crate::infrastructure::sabdakrida::DEFAULT_SABDAKRIDA_URL;
use crate::infrastructure::text_processing::DEFAULT_CHUNK_SIZE;

use super::Environment;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

const DEFAULT_TOP_K: usize = 5;
const DEFAULT_COACH_TOP_K: usize = 3;

const DEFAULT_CHAT_MODEL: &str = "Qwen/Qwen3.5-397B-A17B-TEE";
const DEFAULT_FEEDBACK_MODEL: &str = "XiaomiMiMo/MiMo-V2-Flash-TEE";
const DEFAULT_SSE_KEEP_ALIVE_SECONDS: u64 = 15;

const DEFAULT_LLM_TIMEOUT_SECONDS: u64 = 120;
const DEFAULT_SPEECH_TIMEOUT_SECONDS: u64 = 60;
const DEFAULT_SABDAKRIDA_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_ASSESSMENT_TIMEOUT_SECONDS: u64 = 90;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub retrieval: RetrievalSettings,
    pub llm: LlmSettings,
    pub speech: SpeechSettings,
    pub sabdakrida: SabdakridaSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalSettings {
    pub corpus_path: String,
    pub chunk_size: usize,
    pub top_k: usize,
    pub coach_top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub chat: CompletionProfile,
    pub ask: CompletionProfile,
    pub feedback: CompletionProfile,
    pub tutor: CompletionProfile,
    pub coach: CompletionProfile,
    pub sse_keep_alive_seconds: u64,
    /// Applies to buffered completions; streamed replies only bound the
    /// connect phase.
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub transcription_url: String,
    pub synthesis_url: String,
    pub default_voice: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SabdakridaSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Scoring recorded speech takes longer than the other calls.
    pub assessment_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.{Environment}` file
    /// and `APP_`-prefixed environment variables (`APP_LLM__API_KEY`, ...).
    ///
    /// The bare variables the web app used (`CHUTES_API_KEY`,
    /// `CHUTES_API_TOKEN`, `TUTOR_MODEL`, `RAG_MODEL`, `SABDAKRIDA_URL`) are
    /// honored as defaults below the `APP_` overrides.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("retrieval.corpus_path", DEFAULT_CORPUS_PATH)?
            .set_default("retrieval.chunk_size", DEFAULT_CHUNK_SIZE as i64)?
            .set_default("retrieval.top_k", DEFAULT_TOP_K as i64)?
            .set_default("retrieval.coach_top_k", DEFAULT_COACH_TOP_K as i64)?
            .set_default("llm.base_url", DEFAULT_CHAT_BASE_URL)?
            .set_default("llm.chat.model", env_or("TUTOR_MODEL", DEFAULT_CHAT_MODEL))?
            .set_default("llm.chat.max_tokens", 1024_i64)?
            .set_default("llm.chat.temperature", 0.7_f64)?
            .set_default("llm.ask.model", env_or("RAG_MODEL", DEFAULT_CHAT_MODEL))?
            .set_default("llm.ask.max_tokens", 700_i64)?
            .set_default("llm.ask.temperature", 0.1_f64)?
            .set_default("llm.feedback.model", DEFAULT_FEEDBACK_MODEL)?
            .set_default("llm.feedback.max_tokens", 300_i64)?
            .set_default("llm.feedback.temperature", 0.3_f64)?
            .set_default("llm.tutor.model", env_or("TUTOR_MODEL", DEFAULT_CHAT_MODEL))?
            .set_default("llm.tutor.max_tokens", 400_i64)?
            .set_default("llm.tutor.temperature", 0.7_f64)?
            .set_default("llm.coach.model", DEFAULT_FEEDBACK_MODEL)?
            .set_default("llm.coach.max_tokens", 300_i64)?
            .set_default("llm.coach.temperature", 0.6_f64)?
            .set_default(
                "llm.sse_keep_alive_seconds",
                DEFAULT_SSE_KEEP_ALIVE_SECONDS as i64,
            )?
            .set_default("llm.timeout_seconds", DEFAULT_LLM_TIMEOUT_SECONDS as i64)?
            .set_default("speech.transcription_url", DEFAULT_TRANSCRIPTION_URL)?
            .set_default("speech.synthesis_url", DEFAULT_SYNTHESIS_URL)?
            .set_default("speech.default_voice", DEFAULT_VOICE)?
            .set_default("speech.timeout_seconds", DEFAULT_SPEECH_TIMEOUT_SECONDS as i64)?
            .set_default(
                "sabdakrida.base_url",
                env_or("SABDAKRIDA_URL", DEFAULT_SABDAKRIDA_URL),
            )?
            .set_default(
                "sabdakrida.timeout_seconds",
                DEFAULT_SABDAKRIDA_TIMEOUT_SECONDS as i64,
            )?
            .set_default(
                "sabdakrida.assessment_timeout_seconds",
                DEFAULT_ASSESSMENT_TIMEOUT_SECONDS as i64,
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?;

        if let Some(api_key) = chutes_api_key_from_env() {
            builder = builder.set_default("llm.api_key", api_key)?;
        }

        let mut settings: Settings = builder
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if settings.speech.api_key.is_none() {
            settings.speech.api_key = settings.llm.api_key.clone();
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl SpeechSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl SabdakridaSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    pub fn assessment_timeout(&self) -> Duration {
        Duration::from_secs(self.assessment_timeout_seconds.max(1))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            retrieval: RetrievalSettings {
                corpus_path: DEFAULT_CORPUS_PATH.to_string(),
                chunk_size: DEFAULT_CHUNK_SIZE,
                top_k: DEFAULT_TOP_K,
                coach_top_k: DEFAULT_COACH_TOP_K,
            },
            llm: LlmSettings {
                base_url: DEFAULT_CHAT_BASE_URL.to_string(),
                api_key: None,
                chat: CompletionProfile::new(DEFAULT_CHAT_MODEL, 1024, 0.7),
                ask: CompletionProfile::new(DEFAULT_CHAT_MODEL, 700, 0.1),
                feedback: CompletionProfile::new(DEFAULT_FEEDBACK_MODEL, 300, 0.3),
                tutor: CompletionProfile::new(DEFAULT_CHAT_MODEL, 400, 0.7),
                coach: CompletionProfile::new(DEFAULT_FEEDBACK_MODEL, 300, 0.6),
                sse_keep_alive_seconds: DEFAULT_SSE_KEEP_ALIVE_SECONDS,
                timeout_seconds: DEFAULT_LLM_TIMEOUT_SECONDS,
            },
            speech: SpeechSettings {
                api_key: None,
                transcription_url: DEFAULT_TRANSCRIPTION_URL.to_string(),
                synthesis_url: DEFAULT_SYNTHESIS_URL.to_string(),
                default_voice: DEFAULT_VOICE.to_string(),
                timeout_seconds: DEFAULT_SPEECH_TIMEOUT_SECONDS,
            },
            sabdakrida: SabdakridaSettings {
                base_url: DEFAULT_SABDAKRIDA_URL.to_string(),
                timeout_seconds: DEFAULT_SABDAKRIDA_TIMEOUT_SECONDS,
                assessment_timeout_seconds: DEFAULT_ASSESSMENT_TIMEOUT_SECONDS,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn chutes_api_key_from_env() -> Option<String> {
    ["CHUTES_API_KEY", "CHUTES_API_TOKEN"]
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|v| !v.trim().is_empty())
}
