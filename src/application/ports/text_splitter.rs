use crate::domain::Chunk;

/// Splits corpus text into ordered passages. Splitting never fails; text with
/// no content yields no chunks.
pub trait TextSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<Chunk>;
}
