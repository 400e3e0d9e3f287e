pub mod audio;
pub mod corpus;
pub mod llm;
pub mod observability;
pub mod sabdakrida;
pub mod text_processing;
