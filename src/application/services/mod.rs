mod keyword_scorer;
mod retrieval_service;
mod top_k_selector;
mod tutor_service;

pub use keyword_scorer::{score_chunk, score_chunks};
pub use retrieval_service::RetrievalService;
pub use top_k_selector::select_top_k;
pub use tutor_service::{
    ASK_SYSTEM_PROMPT, DEFAULT_CHAT_SYSTEM_PROMPT, DEFAULT_LANGUAGE, FALLBACK_EXPLANATION,
    FEEDBACK_SYSTEM_PROMPT, TUTOR_SYSTEM_PROMPT, TutorError, TutorProfiles, TutorService,
};
