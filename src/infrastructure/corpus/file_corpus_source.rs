use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{CorpusSource, CorpusSourceError};
use crate::domain::Corpus;

pub const DEFAULT_CORPUS_PATH: &str = "source.txt";

/// Reads the corpus from a UTF-8 text file on every load.
pub struct FileCorpusSource {
    path: PathBuf,
}

impl FileCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CorpusSource for FileCorpusSource {
    async fn load(&self) -> Result<Corpus, CorpusSourceError> {
        let path_label = self.path.display().to_string();

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CorpusSourceError::NotFound(path_label.clone()),
                _ => CorpusSourceError::Unreadable(format!("{}: {}", path_label, e)),
            })?;

        tracing::debug!(path = %path_label, bytes = text.len(), "Corpus loaded");

        Ok(Corpus::new(text))
    }
}
