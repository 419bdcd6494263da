//! Fixed English stop-word set used by the scoring strategies
//!
//! The list is an implementation constant, not user-configurable. It covers
//! articles, conjunctions, common pronouns and auxiliary verbs plus a tail
//! of very common content-light words. Only Latin-script stop words are
//! filtered; other scripts degrade gracefully to unfiltered frequency
//! scoring.

use std::collections::HashSet;

/// Words excluded from term weighting and similarity vectors.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were",
    "to", "of", "in", "on", "at", "for", "width", "that", "this", "it",
    "you", "i", "we", "they", "he", "she", "have", "has", "had", "do",
    "does", "did", "with", "as", "by", "from", "not", "what", "all",
    "when", "can", "said", "there", "use", "each", "which", "how",
    "their", "if", "will", "up", "other", "about", "out", "many", "then",
    "them", "these", "so", "some", "her", "would", "make", "like", "him",
    "into", "time", "look", "two", "more", "write", "go", "see", "number",
    "no", "way", "could", "people", "my", "than", "first", "water",
    "been", "call", "who", "oil", "its", "now", "find", "long", "down",
    "day", "get", "come", "made", "may", "part",
];

/// Build the default stop-word set.
pub fn default_stop_words() -> HashSet<&'static str> {
    STOP_WORDS.iter().copied().collect()
}
