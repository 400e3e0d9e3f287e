use crate::domain::{Chunk, QueryTerms, ScoredChunk};

/// Counts the query terms that appear anywhere in the chunk.
///
/// Matching is a case-folded substring test: "cat" matches inside
/// "category", and "guna" does not match "guṇa".
pub fn score_chunk(terms: &QueryTerms, chunk: &Chunk) -> usize {
    if terms.is_empty() {
        return 0;
    }

    let haystack = chunk.text.to_lowercase();
    terms.iter().filter(|term| haystack.contains(term)).count()
}

pub fn score_chunks(terms: &QueryTerms, chunks: Vec<Chunk>) -> Vec<ScoredChunk> {
    chunks
        .into_iter()
        .map(|chunk| {
            let score = score_chunk(terms, &chunk);
            ScoredChunk::new(chunk, score)
        })
        .collect()
}
