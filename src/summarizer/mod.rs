//! Extractive transcript summarization
//!
//! Pipeline: normalize → segment into sentences → score each sentence with
//! the configured strategy → select the top-K → reassemble in document
//! order. Two scoring strategies are available behind the same contract:
//! a term-frequency sum and a similarity-weighted degree centrality (a
//! single-pass approximation of TextRank, deliberately not the iterative
//! eigenvector version — see [`ScoringStrategy::GraphCentrality`]).
//!
//! The entry point never fails: every input string maps to an output
//! string, with fixed fallback messages for degenerate inputs.

pub mod centrality;
pub mod frequency;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

use crate::stopwords;
use crate::text;

use centrality::CentralityScorer;
use frequency::FrequencyScorer;

/// Fixed message returned when the text yields no scorable terms.
pub const NOT_ENOUGH_CONTENT: &str = "Not enough content to summarize.";

/// Character budget for the raw-prefix fallback when no sentence survives
/// segmentation.
const RAW_PREFIX_CHARS: usize = 500;

/// Sentence scoring strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringStrategy {
    /// Score = sum of normalized term weights over the sentence's tokens.
    FrequencySum,
    /// Score = sum of cosine similarities to every other sentence.
    ///
    /// This is similarity-weighted degree centrality computed in a single
    /// O(n²) pairwise sweep, not iterative PageRank. The output is fully
    /// deterministic for identical input.
    GraphCentrality,
}

impl FromStr for ScoringStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frequency" | "frequency-sum" => Ok(ScoringStrategy::FrequencySum),
            "centrality" | "graph-centrality" | "textrank" => Ok(ScoringStrategy::GraphCentrality),
            other => Err(anyhow::anyhow!("unknown scoring strategy: {}", other)),
        }
    }
}

/// Configuration for the summarization engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Sentence scoring strategy
    pub strategy: ScoringStrategy,

    /// Default number of sentences in a summary
    pub num_sentences: usize,

    /// Sentences with this many characters or fewer are dropped as
    /// segmentation noise
    pub min_sentence_chars: usize,

    /// Minimum token length for the term-weight table (frequency strategy)
    pub min_token_chars: usize,

    /// Divide frequency scores by sqrt(token count) to reduce the bias
    /// toward long sentences
    pub length_normalize: bool,

    /// Cap the final summary at this many characters, appending an
    /// ellipsis when truncated (None = no cap)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_summary_chars: Option<usize>,

    /// Transcripts longer than this are truncated before normalization to
    /// bound the O(n²) centrality sweep
    pub max_input_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            strategy: ScoringStrategy::GraphCentrality,
            num_sentences: 5,
            min_sentence_chars: 20,
            min_token_chars: 3,
            length_normalize: false,
            max_summary_chars: None,
            max_input_chars: 50_000,
        }
    }
}

/// One score per sentence, produced by either scoring strategy.
///
/// `None` means no sentence carried any scorable term, which callers must
/// treat as "cannot summarize".
pub(crate) trait SentenceScorer {
    fn score(&self, sentences: &[String]) -> Option<Vec<f64>>;
}

/// Extractive summarization engine
///
/// Holds only immutable state (the stop-word set and configuration), so a
/// single instance can be shared freely across threads and calls.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stop_words: HashSet<&'static str>,
}

impl Summarizer {
    /// Create a summarizer with default configuration
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create a summarizer with a custom configuration
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            stop_words: stopwords::default_stop_words(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Condense `text` into at most `num_sentences` sentences.
    ///
    /// Always returns a string and never panics:
    /// - empty or whitespace-only input returns an empty string;
    /// - if no sentence survives segmentation, an ellipsized prefix of the
    ///   *normalized* text is returned instead (normalized rather than raw,
    ///   so bracketed caption noise never reaches the output);
    /// - if no sentence contains a scorable term, the fixed
    ///   [`NOT_ENOUGH_CONTENT`] message is returned;
    /// - `num_sentences == 0` returns an empty string.
    ///
    /// Input longer than the configured `max_input_chars` is truncated
    /// before normalization, so text beyond the cap never contributes
    /// sentences.
    ///
    /// Selected sentences are re-sorted into original document order
    /// before joining, so the summary reads coherently.
    pub fn summarize(&self, text: &str, num_sentences: usize) -> String {
        if num_sentences == 0 {
            return String::new();
        }
        if text.trim().is_empty() {
            return String::new();
        }

        let capped = text::truncate_chars(text, self.config.max_input_chars);
        let clean = text::normalize(capped);
        if clean.is_empty() {
            // Input was nothing but bracketed annotations.
            return String::new();
        }

        let sentences = text::split_sentences(&clean, self.config.min_sentence_chars);
        if sentences.is_empty() {
            return raw_prefix_fallback(&clean);
        }

        if sentences.len() <= num_sentences {
            debug!(
                "📝 Only {} sentence(s) after filtering, returning all",
                sentences.len()
            );
            return self.cap_length(sentences.join(" "));
        }

        let scorer: Box<dyn SentenceScorer + '_> = match self.config.strategy {
            ScoringStrategy::FrequencySum => Box::new(FrequencyScorer::new(
                &clean,
                &self.stop_words,
                self.config.min_token_chars,
                self.config.length_normalize,
            )),
            ScoringStrategy::GraphCentrality => Box::new(CentralityScorer::new(&self.stop_words)),
        };

        let scores = match scorer.score(&sentences) {
            Some(scores) => scores,
            None => return NOT_ENOUGH_CONTENT.to_string(),
        };

        let selected = select_top_k(&scores, num_sentences);
        debug!(
            "📝 Selected {} of {} sentences ({:?})",
            selected.len(),
            sentences.len(),
            self.config.strategy
        );

        let summary = selected
            .iter()
            .map(|&i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.cap_length(summary)
    }

    /// Summarize with the configured default sentence budget
    pub fn summarize_default(&self, text: &str) -> String {
        self.summarize(text, self.config.num_sentences)
    }

    fn cap_length(&self, summary: String) -> String {
        match self.config.max_summary_chars {
            Some(max) if summary.chars().count() > max => {
                format!("{}...", text::truncate_chars(&summary, max).trim_end())
            }
            _ => summary,
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Indices of the `k` highest-scoring sentences, in document order.
///
/// Ties break toward the earlier sentence so output is reproducible
/// regardless of hash iteration order upstream.
fn select_top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    let mut selected: Vec<usize> = ranked.into_iter().take(k).collect();
    selected.sort_unstable();
    selected
}

fn raw_prefix_fallback(clean: &str) -> String {
    if clean.chars().count() > RAW_PREFIX_CHARS {
        format!("{}...", text::truncate_chars(clean, RAW_PREFIX_CHARS))
    } else {
        clean.to_string()
    }
}
