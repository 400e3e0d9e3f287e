use async_trait::async_trait;

use crate::domain::Corpus;

#[async_trait]
pub trait CorpusSource: Send + Sync {
    async fn load(&self) -> Result<Corpus, CorpusSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusSourceError {
    #[error("corpus not found: {0}")]
    NotFound(String),
    #[error("corpus unreadable: {0}")]
    Unreadable(String),
}
