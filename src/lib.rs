// Gist: extractive text summarization by word-frequency scoring.
//
// This is the library root. Each module is one stage of the summarization
// pipeline, plus the configuration and output formatting used by the CLI.

pub mod config;
pub mod output;
pub mod scoring;
pub mod segment;
pub mod stopwords;
pub mod summarize;
pub mod tokenize;
