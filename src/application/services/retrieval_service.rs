use std::sync::Arc;

use crate::application::ports::{CorpusSource, TextSplitter};
use crate::domain::QueryTerms;

use super::keyword_scorer::score_chunks;
use super::top_k_selector::select_top_k;

/// Lexical retrieval over the corpus: load, chunk, score and select on every
/// call. Nothing is cached between calls.
pub struct RetrievalService {
    corpus_source: Arc<dyn CorpusSource>,
    text_splitter: Arc<dyn TextSplitter>,
    top_k: usize,
}

impl RetrievalService {
    pub fn new(
        corpus_source: Arc<dyn CorpusSource>,
        text_splitter: Arc<dyn TextSplitter>,
        top_k: usize,
    ) -> Self {
        Self {
            corpus_source,
            text_splitter,
            top_k,
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub async fn retrieve(&self, query: &str) -> Vec<String> {
        self.retrieve_top(query, self.top_k).await
    }

    /// Like [`retrieve`](Self::retrieve) with an explicit result limit. An
    /// unreadable corpus yields no passages.
    #[tracing::instrument(skip(self, query))]
    pub async fn retrieve_top(&self, query: &str, top_k: usize) -> Vec<String> {
        let terms = QueryTerms::parse(query);
        if terms.is_empty() {
            tracing::debug!("Query has no scorable terms");
            return Vec::new();
        }

        let corpus = match self.corpus_source.load().await {
            Ok(corpus) => corpus,
            Err(e) => {
                tracing::warn!(error = %e, "Corpus unavailable, retrieving without context");
                return Vec::new();
            }
        };

        let chunks = self.text_splitter.split(corpus.text());
        let chunk_count = chunks.len();
        let selected = select_top_k(score_chunks(&terms, chunks), top_k);

        tracing::debug!(
            terms = terms.len(),
            chunks = chunk_count,
            selected = selected.len(),
            "Retrieval completed"
        );

        selected.into_iter().map(|chunk| chunk.into_text()).collect()
    }
}
