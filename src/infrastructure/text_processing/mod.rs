mod paragraph_splitter;

pub use paragraph_splitter::{DEFAULT_CHUNK_SIZE, PARAGRAPH_SEPARATOR, ParagraphSplitter};
