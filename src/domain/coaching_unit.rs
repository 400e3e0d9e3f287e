use serde::Deserialize;

pub const DEFAULT_UNIT_OVERVIEW: &str = "Practice these phonemes.";

/// The pronunciation unit a coaching conversation is about. The unit catalog
/// lives in the app, which sends along what the coach needs to know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CoachingUnit {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    /// Display forms such as "अ a".
    #[serde(default)]
    pub phonemes: Vec<String>,
}

impl CoachingUnit {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Unknown")
    }

    pub fn overview(&self) -> &str {
        self.overview
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or(DEFAULT_UNIT_OVERVIEW)
    }
}
