mod card_attempt;
mod chunk;
mod coaching_unit;
mod completion_profile;
mod corpus;
mod drawing;
mod learner_progress;
mod message;
mod message_role;
mod pathway;
mod pronunciation_attempt;
mod query_terms;
mod sanskrit_speech;
mod speech;
mod tutor_session;

pub use card_attempt::CardAttempt;
pub use chunk::{Chunk, ScoredChunk};
pub use coaching_unit::{CoachingUnit, DEFAULT_UNIT_OVERVIEW};
pub use completion_profile::CompletionProfile;
pub use corpus::Corpus;
pub use drawing::{DEFAULT_DRAWING_FILE_NAME, DrawingUpload};
pub use learner_progress::LearnerProgress;
pub use message::ChatMessage;
pub use message_role::MessageRole;
pub use pathway::{Pathway, PathwayLevel};
pub use pronunciation_attempt::{DEFAULT_USER_ID, PronunciationAttempt};
pub use query_terms::{MIN_TERM_CHARS, QueryTerms};
pub use sanskrit_speech::{COMMAND_STYLE, NARRATION_STYLE, SanskritSpeech};
pub use speech::{
    DEFAULT_AUDIO_CONTENT_TYPE, DEFAULT_SPEECH_SPEED, MAX_SPEECH_SPEED, MIN_SPEECH_SPEED,
    SynthesisRequest, SynthesizedAudio,
};
pub use tutor_session::{
    DEFAULT_LEVEL, TutorSessionStart, TutorSubmission, parse_level, parse_level_text,
};
