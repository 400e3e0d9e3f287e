use serde::Deserialize;

/// What the learner has covered so far, as tracked by the app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProgress {
    #[serde(default)]
    pub topics_introduced: Vec<String>,
    #[serde(default)]
    pub topics_mastered: Vec<String>,
    #[serde(default)]
    pub last_topic: Option<String>,
}

impl LearnerProgress {
    pub fn summary(&self) -> String {
        fn list_or_nothing(topics: &[String]) -> String {
            if topics.is_empty() {
                "nothing".to_string()
            } else {
                topics.join(", ")
            }
        }

        format!(
            "Introduced: {}. Mastered: {}. Last: {}",
            list_or_nothing(&self.topics_introduced),
            list_or_nothing(&self.topics_mastered),
            self.last_topic
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("none")
        )
    }
}
