use regex::Regex;
use std::sync::LazyLock;

use crate::application::ports::TextSplitter;
use crate::domain::Chunk;

pub const DEFAULT_CHUNK_SIZE: usize = 600;
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());

/// Packs whole paragraphs into chunks of roughly `chunk_size` characters.
///
/// The size is a soft cap: a paragraph is never cut, so one longer than the
/// cap becomes a chunk of its own.
pub struct ParagraphSplitter {
    chunk_size: usize,
}

impl ParagraphSplitter {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for ParagraphSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl TextSplitter for ParagraphSplitter {
    fn split(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for paragraph in PARAGRAPH_BREAK.split(text) {
            let paragraph_len = paragraph.chars().count();

            if current_len + paragraph_len > self.chunk_size && current_len > 0 {
                flush(&mut chunks, &current);
                current.clear();
                current_len = 0;
            }

            if !current.is_empty() {
                current.push_str(PARAGRAPH_SEPARATOR);
                current_len += PARAGRAPH_SEPARATOR.len();
            }
            current.push_str(paragraph);
            current_len += paragraph_len;
        }

        flush(&mut chunks, &current);
        chunks
    }
}

fn flush(chunks: &mut Vec<Chunk>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        chunks.push(Chunk::new(trimmed.to_string()));
    }
}
