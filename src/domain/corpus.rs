/// The static source text searched for chat context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
