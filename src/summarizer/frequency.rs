//! Frequency-sum sentence scoring
//!
//! Builds a term-weight table from the whole document (raw counts divided
//! by the maximum count, so the most frequent eligible term always weighs
//! 1.0) and scores each sentence as the sum of its tokens' weights.

use std::collections::{HashMap, HashSet};

use super::SentenceScorer;
use crate::text;

/// Scores sentences by summed normalized term frequency
pub(crate) struct FrequencyScorer {
    weights: HashMap<String, f64>,
    length_normalize: bool,
}

impl FrequencyScorer {
    /// Build the term-weight table from the full normalized text.
    ///
    /// Stop words and tokens shorter than `min_token_chars` are excluded
    /// before counting.
    pub fn new(
        text: &str,
        stop_words: &HashSet<&'static str>,
        min_token_chars: usize,
        length_normalize: bool,
    ) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in text::tokenize(text) {
            if stop_words.contains(token.as_str()) || token.chars().count() < min_token_chars {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        let max_count = counts.values().copied().max().unwrap_or(0);
        let weights = if max_count == 0 {
            HashMap::new()
        } else {
            counts
                .into_iter()
                .map(|(token, count)| (token, f64::from(count) / f64::from(max_count)))
                .collect()
        };

        Self {
            weights,
            length_normalize,
        }
    }

    /// Normalized weight for a token, if it is in the table
    #[cfg(test)]
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }
}

impl SentenceScorer for FrequencyScorer {
    fn score(&self, sentences: &[String]) -> Option<Vec<f64>> {
        if self.weights.is_empty() {
            return None;
        }

        let scores = sentences
            .iter()
            .map(|sentence| {
                let tokens = text::tokenize(sentence);
                let sum: f64 = tokens
                    .iter()
                    .filter_map(|t| self.weights.get(t.as_str()))
                    .sum();
                if self.length_normalize && !tokens.is_empty() {
                    sum / (tokens.len() as f64).sqrt()
                } else {
                    sum
                }
            })
            .collect();
        Some(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::default_stop_words;

    fn scorer(text: &str, length_normalize: bool) -> FrequencyScorer {
        FrequencyScorer::new(text, &default_stop_words(), 3, length_normalize)
    }

    #[test]
    fn test_most_frequent_term_weighs_one() {
        let s = scorer("protocol protocol protocol browser browser server", false);
        assert_eq!(s.weight("protocol"), Some(1.0));
        assert!((s.weight("browser").unwrap() - 2.0 / 3.0).abs() < 1e-9);
        assert!((s.weight("server").unwrap() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_stop_words_and_short_tokens_excluded() {
        let s = scorer("the the the an ox is on tv protocol", false);
        assert_eq!(s.weight("the"), None);
        assert_eq!(s.weight("ox"), None); // two chars, below the minimum
        assert_eq!(s.weight("protocol"), Some(1.0));
    }

    #[test]
    fn test_empty_table_yields_none() {
        let s = scorer("the and or is a an", false);
        let sentences = vec!["the and or is a an".to_string()];
        assert!(s.score(&sentences).is_none());
    }

    #[test]
    fn test_sentence_with_repeated_terms_scores_higher() {
        let text = "Networking hardware moves packets. Packets carry networking payloads. \
                    Gardening requires patience.";
        let s = scorer(text, false);
        let sentences: Vec<String> = vec![
            "Networking hardware moves packets.".into(),
            "Gardening requires patience.".into(),
        ];
        let scores = s.score(&sentences).unwrap();
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_length_normalization_divides_by_sqrt() {
        let text = "alpha alpha beta";
        let plain = scorer(text, false);
        let normalized = scorer(text, true);
        let sentences = vec!["alpha alpha beta".to_string()];

        let raw = plain.score(&sentences).unwrap()[0];
        let scaled = normalized.score(&sentences).unwrap()[0];
        assert!((scaled - raw / 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let text = "The summarizer must be deterministic. Determinism matters for caching. \
                    The summarizer output feeds a cache.";
        let sentences: Vec<String> = text.split(". ").map(|s| s.to_string()).collect();
        let a = scorer(text, false).score(&sentences).unwrap();
        let b = scorer(text, false).score(&sentences).unwrap();
        assert_eq!(a, b);
    }
}
