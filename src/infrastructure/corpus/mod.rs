mod file_corpus_source;

pub use file_corpus_source::{DEFAULT_CORPUS_PATH, FileCorpusSource};
