use serde_json::Value;

/// A learner's answer to a drill card, sent for an explanation of the mistake.
#[derive(Debug, Clone, PartialEq)]
pub struct CardAttempt {
    pub card_id: Option<String>,
    pub card_type: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub context: Value,
}

impl CardAttempt {
    pub fn context_json(&self) -> String {
        if self.context.is_null() {
            return "{}".to_string();
        }
        serde_json::to_string(&self.context).unwrap_or_else(|_| "{}".to_string())
    }
}
