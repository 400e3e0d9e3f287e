use crate::domain::{Chunk, ScoredChunk};

/// Keeps the `top_k` highest-scoring chunks, highest first. Chunks scoring
/// zero are dropped; equal scores keep their corpus order.
pub fn select_top_k(scored: Vec<ScoredChunk>, top_k: usize) -> Vec<Chunk> {
    let mut relevant: Vec<ScoredChunk> = scored.into_iter().filter(|s| s.is_relevant()).collect();

    // stable
    relevant.sort_by(|a, b| b.score.cmp(&a.score));

    relevant
        .into_iter()
        .take(top_k)
        .map(|scored| scored.chunk)
        .collect()
}
