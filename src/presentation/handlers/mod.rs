mod ask;
mod chat;
mod drawing;
pub mod error_response;
mod feedback;
mod health;
pub mod openai_types;
mod pronunciation;
mod rag;
mod sanskrit_audio;
mod transcribe;
mod tts;
mod tutor;
mod tutor_session;
mod unit_coach;

pub use ask::ask_handler;
pub use chat::chat_handler;
pub use drawing::{RecognitionResponse, recognize_drawing_handler};
pub use feedback::feedback_handler;
pub use health::health_handler;
pub use pronunciation::{drills_handler, session_handler};
pub use rag::{RagResponse, rag_handler};
pub use sanskrit_audio::{feedback_audio_handler, sanskrit_tts_handler};
pub use transcribe::transcribe_handler;
pub use tts::tts_handler;
pub use tutor::{DEFAULT_TUTOR_VOICE, tutor_handler};
pub use tutor_session::{
    session_start_handler, session_submit_handler, tutor_pathway_handler, tutor_profile_handler,
};
pub use unit_coach::unit_coach_handler;
