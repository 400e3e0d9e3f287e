use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, LlmTokenStream};
use crate::domain::{
    CardAttempt, ChatMessage, CoachingUnit, CompletionProfile, LearnerProgress, MessageRole,
};

use super::retrieval_service::RetrievalService;

pub const DEFAULT_CHAT_SYSTEM_PROMPT: &str = "You are the search/help function inside a Sanskrit learning app. Be direct and sharp. No fluff.

CONTEXT: You operate within a Sanskrit app. Most queries are Sanskrit-related: grammar, vocabulary, pronunciation, roots, sandhi, etc. Users expect quick, verified answers.

OUTPUT:
- Use IAST (e.g. gacchati, √gam) and Devanagari (e.g. गच्छति, √गम्) when discussing Sanskrit.
- Give correct, attested answers. Prefer canonical sources: Whitney's Sanskrit Grammar for grammar; standard pratyāhāras, dhātus, and declensions.
- Be concise. Answer the question, then stop. If they need more, they'll ask.
- For grammar: cite rule or pattern when helpful (e.g. Whitney §X, or \"Pāṇini's system\").
- If unsure, say so. Don't invent.";

pub const ASK_SYSTEM_PROMPT: &str = "You are a Sanskrit grammar tutor grounded in Pāṇini's Aṣṭādhyāyī and Whitney's Sanskrit Grammar.
Be concise. Cite sources when you know them (e.g. \"Whitney §X\", \"Pāṇini 6.1.77\").
If you're unsure, say so. One paragraph unless a step-by-step derivation is requested.";

pub const FEEDBACK_SYSTEM_PROMPT: &str = "You are a Sanskrit grammar teacher following Pāṇini's system.
Your explanations always:
1. Name the phonological law or rule operating (e.g., \"Grassmann's Law\", \"guṇa strengthening\")
2. Trace the derivation step by step
3. Connect to something the learner has already seen (anuvṛtti — carry forward)
4. End with one forward pointer: \"This same principle will appear when you encounter [X]\"
Keep responses under 120 words.";

pub const TUTOR_SYSTEM_PROMPT: &str = "You are a patient Sanskrit teacher following Pāṇini's system. You teach through conversation, not lectures.

CRITICAL — SPEECH OUTPUT: Everything you output is spoken aloud by text-to-speech. So:
- Be CONCISE. Short sentences. No long paragraphs or lists — they sound robotic when read aloud.
- For Sanskrit vowels, words, or pronunciation guidance: use DEVANAGARI (e.g. अ आ इ) so the TTS pronounces them correctly. Do not use transliteration like \"a, ā\" when teaching how to say something; use the script: अ (a) — the Devanagari tells the learner how it looks and helps TTS.
- Avoid spelling out acronyms or abbreviations — they get read letter-by-letter and sound odd.
- When giving pronunciation hints, put the Devanagari first, then a brief note in the learner's language: \"अ — like 'u' in but.\"

KASHMIR SHAIVISM THREAD: When relevant, gently connect grammar to Śiva Sutras / Tantrāloka. Keep it brief. Do not force it.

RULES:
1. BABY STEPS: One sound or concept at a time. Never dump multiple things.
2. TEST BEFORE MOVING ON: Ask them to say it or answer a question. Only advance when they show understanding.
3. USE THEIR PROGRESS: Teach only what they haven't mastered. Build on what they know.
4. BE CONVERSATIONAL: Short messages. Questions. Warmth.
5. SHOW DEVANAGARI: When teaching a sound, show the letter: अ (a).
6. IF WRONG: Gently correct, one sentence, then another chance.
7. IF RIGHT: Brief praise, then next step.
8. ENCOURAGE VOICE: \"Try saying it\" or \"Can you pronounce it?\"

When you receive LEARNER PROGRESS, start from where they left off. If topicsIntroduced is empty, start with: \"Let's begin with अ (a) — like 'u' in but. Can you say it?\"";

const CURRICULUM: &str = "CURRICULUM (teach in this order):
1. Vowels: a, ā, i, ī, u, ū, ṛ, e, o, ai, au — start with अ (a)
2. Stops: velar (ka, kha...), palatal (ca...), retroflex (ṭa...), dental (ta...), labial (pa...)
3. Pratyāhāras, Sandhi, Dhātus";

const COACH_RULES: &str = "RULES:
- Be concise. Output is spoken via TTS — use Devanagari for Sanskrit sounds, short sentences.
- Answer questions about pronunciation, articulation, or the phonemes.
- When testing: pick a drill, run it with phonemes from this unit. One round at a time.
- For \"repeat after\": say which phoneme to repeat, wait for their answer before continuing.
- For \"listen and identify\": say you'll play one (they use the app to hear), they respond.
- No (a) or (ā) after Devanagari in speech — TTS pronounces it wrong.";

/// Drills the coach runs when the learner asks to be tested.
const COACH_DRILLS: &[(&str, &str, &str)] = &[
    (
        "repeat-after",
        "Repeat after me",
        "Say one phoneme from the unit and have the learner repeat it",
    ),
    (
        "listen-identify",
        "Listen and identify",
        "Play one phoneme and have the learner name it",
    ),
    (
        "minimal-pair",
        "Minimal pairs",
        "Contrast two similar phonemes and have the learner say which is which",
    ),
];

pub const DEFAULT_LANGUAGE: &str = "en";

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("hi", "Hindi"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("it", "Italian"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ko", "Korean"),
];

pub const FALLBACK_EXPLANATION: &str = "Unable to generate explanation.";

/// Completion settings for each tutor call site.
#[derive(Debug, Clone)]
pub struct TutorProfiles {
    pub chat: CompletionProfile,
    pub ask: CompletionProfile,
    pub feedback: CompletionProfile,
    pub tutor: CompletionProfile,
    pub coach: CompletionProfile,
}

pub struct TutorService {
    llm_client: Arc<dyn LlmClient>,
    retrieval_service: Arc<RetrievalService>,
    profiles: TutorProfiles,
    coach_top_k: usize,
}

impl TutorService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        retrieval_service: Arc<RetrievalService>,
        profiles: TutorProfiles,
        coach_top_k: usize,
    ) -> Self {
        Self {
            llm_client,
            retrieval_service,
            profiles,
            coach_top_k,
        }
    }

    #[tracing::instrument(skip(self, question))]
    pub async fn ask(&self, question: &str) -> Result<String, TutorError> {
        let messages = vec![
            ChatMessage::system(ASK_SYSTEM_PROMPT),
            ChatMessage::user(question.trim()),
        ];

        let answer = self
            .llm_client
            .complete(&messages, &self.profiles.ask)
            .await?;

        Ok(answer)
    }

    #[tracing::instrument(skip(self, attempt), fields(card_type = %attempt.card_type))]
    pub async fn explain(&self, attempt: &CardAttempt) -> Result<String, TutorError> {
        let user_prompt = format!(
            "Card type: {}\nUser answer: {}\nCorrect answer: {}\nContext: {}\nPlease explain what went wrong and how the correct form is derived.",
            attempt.card_type,
            attempt.user_answer,
            attempt.correct_answer,
            attempt.context_json()
        );

        let messages = vec![
            ChatMessage::system(FEEDBACK_SYSTEM_PROMPT),
            ChatMessage::user(user_prompt),
        ];

        let explanation = self
            .llm_client
            .complete(&messages, &self.profiles.feedback)
            .await?;

        if explanation.trim().is_empty() {
            return Ok(FALLBACK_EXPLANATION.to_string());
        }
        Ok(explanation)
    }

    /// One spoken-tutor turn, answered in the learner's language and picking
    /// up from their recorded progress.
    #[tracing::instrument(skip(self, messages, progress), fields(messages = messages.len()))]
    pub async fn converse(
        &self,
        messages: Vec<ChatMessage>,
        progress: Option<&LearnerProgress>,
        native_language: Option<&str>,
    ) -> Result<String, TutorError> {
        let mut system = TUTOR_SYSTEM_PROMPT.to_string();
        system.push_str(&language_instruction(native_language));
        if let Some(progress) = progress {
            system.push_str(&format!(
                "\n\n{}\n\nLEARNER: {}\n",
                CURRICULUM,
                progress.summary()
            ));
        }

        let mut all_messages = Vec::with_capacity(messages.len() + 1);
        all_messages.push(ChatMessage::system(system));
        all_messages.extend(messages);

        let reply = self
            .llm_client
            .complete(&all_messages, &self.profiles.tutor)
            .await?;

        Ok(reply)
    }

    /// Pronunciation coaching for one unit, grounded in the corpus passages
    /// that best match the learner's latest message.
    #[tracing::instrument(skip(self, unit, messages), fields(unit = unit.title()))]
    pub async fn coach(
        &self,
        unit: &CoachingUnit,
        messages: Vec<ChatMessage>,
    ) -> Result<String, TutorError> {
        let last_user_message = messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.trim())
            .unwrap_or_default();

        let passages = if last_user_message.is_empty() {
            Vec::new()
        } else {
            self.retrieval_service
                .retrieve_top(last_user_message, self.coach_top_k)
                .await
        };

        tracing::debug!(passages = passages.len(), "Grounding coach reply");

        let mut all_messages = Vec::with_capacity(messages.len() + 1);
        all_messages.push(ChatMessage::system(coach_system_prompt(unit, &passages)));
        all_messages.extend(messages);

        let reply = self
            .llm_client
            .complete(&all_messages, &self.profiles.coach)
            .await?;

        Ok(reply)
    }

    pub async fn stream_chat(
        &self,
        messages: Vec<ChatMessage>,
        system_prompt: Option<&str>,
    ) -> Result<LlmTokenStream, TutorError> {
        let system = system_prompt
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_CHAT_SYSTEM_PROMPT);

        let mut all_messages = Vec::with_capacity(messages.len() + 1);
        all_messages.push(ChatMessage::system(system));
        all_messages.extend(messages);

        let stream = self
            .llm_client
            .complete_stream(&all_messages, &self.profiles.chat)
            .await?;

        Ok(stream)
    }

    pub fn chat_model(&self) -> &str {
        &self.profiles.chat.model
    }
}

fn language_instruction(code: Option<&str>) -> String {
    let code = code
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE);
    let language = LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(code, |(_, name)| *name);

    format!(
        "\n\nLANGUAGE: Respond ONLY in {0}. All explanations, questions, and feedback must be in {0}. Sanskrit words and Devanagari stay as-is, but surrounding text is in {0}.",
        language
    )
}

fn coach_system_prompt(unit: &CoachingUnit, passages: &[String]) -> String {
    let mut prompt = format!(
        "You are a Sanskrit pronunciation coach for the unit \"{}\".\n",
        unit.title()
    );

    if !passages.is_empty() {
        prompt.push_str(&format!(
            "\nREFERENCE (learnsanskrit.org):\n{}\n\n\nUse the reference above when relevant. Be concise.\n",
            passages.join("\n\n---\n\n")
        ));
    }

    let drills = COACH_DRILLS
        .iter()
        .map(|(id, name, prompt)| format!("- {}: {} — {}", id, name, prompt))
        .collect::<Vec<_>>()
        .join("\n");

    prompt.push_str(&format!(
        "\nUNIT OVERVIEW: {}\nPHONEMES IN THIS UNIT: {}\n\nPREDEFINED DRILLS (use when they ask to \"test me\" or \"drill me\"):\n{}\n\n{}",
        unit.overview(),
        unit.phonemes.join(", "),
        drills,
        COACH_RULES
    ));

    prompt
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}

impl TutorError {
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::Completion(LlmClientError::NotConfigured))
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Completion(e) => e.upstream_status(),
        }
    }
}
