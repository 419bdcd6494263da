//! Graph-centrality sentence scoring
//!
//! A sentence is representative of the document when its word distribution
//! is similar to many other sentences. Each sentence accumulates the
//! cosine similarity of its stop-word-filtered bag-of-words vector against
//! every other sentence in one O(n²) pairwise sweep.
//!
//! This is similarity-weighted degree centrality, not iterative PageRank:
//! there is no damping factor and no convergence loop, which keeps the
//! result deterministic and cheap at the cost of ignoring second-order
//! link structure.

use std::collections::{HashMap, HashSet};

use super::SentenceScorer;
use crate::text;

/// Scores sentences by summed pairwise cosine similarity
pub(crate) struct CentralityScorer<'a> {
    stop_words: &'a HashSet<&'static str>,
}

impl<'a> CentralityScorer<'a> {
    pub fn new(stop_words: &'a HashSet<&'static str>) -> Self {
        Self { stop_words }
    }

    fn content_tokens(&self, sentence: &str) -> Vec<String> {
        text::tokenize(sentence)
            .into_iter()
            .filter(|t| !self.stop_words.contains(t.as_str()))
            .collect()
    }
}

impl SentenceScorer for CentralityScorer<'_> {
    fn score(&self, sentences: &[String]) -> Option<Vec<f64>> {
        let sentence_tokens: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.content_tokens(s))
            .collect();

        if sentence_tokens.iter().all(|tokens| tokens.is_empty()) {
            return None;
        }

        let mut scores = vec![0.0; sentences.len()];
        for i in 0..sentence_tokens.len() {
            for j in (i + 1)..sentence_tokens.len() {
                let sim = cosine_similarity(&sentence_tokens[i], &sentence_tokens[j]);
                if sim > 0.0 {
                    scores[i] += sim;
                    scores[j] += sim;
                }
            }
        }
        Some(scores)
    }
}

/// Cosine similarity between two bag-of-words token lists.
///
/// Returns 0.0 when either list is empty or has a zero-norm vector, which
/// guards the division.
pub(crate) fn cosine_similarity(words_a: &[String], words_b: &[String]) -> f64 {
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let mut counts_a: HashMap<&str, u32> = HashMap::new();
    for w in words_a {
        *counts_a.entry(w.as_str()).or_insert(0) += 1;
    }
    let mut counts_b: HashMap<&str, u32> = HashMap::new();
    for w in words_b {
        *counts_b.entry(w.as_str()).or_insert(0) += 1;
    }

    let dot: f64 = counts_a
        .iter()
        .filter_map(|(word, &count_a)| {
            counts_b
                .get(word)
                .map(|&count_b| f64::from(count_a) * f64::from(count_b))
        })
        .sum();

    let norm_a: f64 = counts_a
        .values()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt();
    let norm_b: f64 = counts_b
        .values()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
