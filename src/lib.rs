/// Transcript Summarizer
///
/// Extractive summarization of video transcripts: word-frequency and
/// graph-centrality sentence scoring behind a single entry point, plus a
/// thin JSON-oriented service wrapper around an abstract transcript source.

pub mod api;
pub mod config;
pub mod stopwords;
pub mod summarizer;
pub mod text;
pub mod transcript;

// Re-export main types for easy access
pub use crate::api::{SummarizeResponse, SummaryOutcome, SummaryService};
pub use crate::config::{Config, ServiceConfig};
pub use crate::summarizer::{ScoringStrategy, Summarizer, SummarizerConfig, NOT_ENOUGH_CONTENT};
pub use crate::transcript::{FileTranscriptSource, TranscriptError, TranscriptSource};
