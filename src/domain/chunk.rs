/// A passage of the corpus: one or more whole paragraphs joined by blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
}

impl Chunk {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: usize,
}

impl ScoredChunk {
    pub fn new(chunk: Chunk, score: usize) -> Self {
        Self { chunk, score }
    }

    pub fn is_relevant(&self) -> bool {
        self.score > 0
    }
}
