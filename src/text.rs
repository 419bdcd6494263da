//! Transcript text normalization, sentence segmentation and tokenization
//!
//! Auto-generated captions arrive as one long string full of newlines and
//! bracketed non-speech markers like `[Music]` or `[Applause]`. Everything
//! downstream (term weighting, sentence scoring) works on the cleaned form
//! produced here.

use regex::Regex;
use std::sync::OnceLock;

/// Sentence-ending punctuation recognized by the segmenter
const SENTENCE_ENDINGS: [char; 3] = ['.', '?', '!'];

fn bracket_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy within a single bracket pair; an unmatched `[` simply
    // never matches and is left in place.
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]").expect("bracket pattern is valid"))
}

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Normalize raw transcript text for segmentation and scoring.
///
/// Strips bracketed caption annotations, converts newlines to spaces and
/// collapses runs of whitespace to a single space. Pure and total: any
/// input string (including empty or with unmatched brackets) produces a
/// normalized output without panicking.
pub fn normalize(text: &str) -> String {
    let without_brackets = bracket_pattern().replace_all(text, "");
    without_brackets
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized text into sentence candidates.
///
/// Splits on `.`, `?` or `!` followed by whitespace, except where the
/// boundary looks like a common abbreviation ("U.S. Senate", "Mr. Smith").
/// Candidates with `min_chars` characters or fewer are dropped as
/// segmentation noise. Order follows document position.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;

    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        let followed_by_space = chars.get(i + 1).map_or(false, |n| n.is_whitespace());
        if SENTENCE_ENDINGS.contains(&c) && followed_by_space && !is_abbreviation(&chars, i) {
            push_candidate(&chars[start..=i], min_chars, &mut sentences);
            start = i + 2;
            i = start;
            continue;
        }
        i += 1;
    }

    if start < chars.len() {
        push_candidate(&chars[start..], min_chars, &mut sentences);
    }

    sentences
}

/// Heuristic abbreviation check at a sentence-ending character.
///
/// Suppresses a split when the boundary matches either of two patterns:
/// a word-char/period/word-char run ending at the boundary ("U.S."), or a
/// single capital followed by a lowercase letter and a period ("Mr.").
fn is_abbreviation(chars: &[char], punct: usize) -> bool {
    // word . word <punct> — interior-period acronyms
    if punct >= 3
        && chars[punct - 3].is_alphanumeric()
        && chars[punct - 2] == '.'
        && chars[punct - 1].is_alphanumeric()
    {
        return true;
    }
    // Capital lowercase . — title-style abbreviations
    if punct >= 2
        && chars[punct] == '.'
        && chars[punct - 2].is_uppercase()
        && chars[punct - 1].is_lowercase()
    {
        return true;
    }
    false
}

fn push_candidate(chars: &[char], min_chars: usize, out: &mut Vec<String>) {
    let candidate: String = chars.iter().collect();
    let trimmed = candidate.trim();
    if trimmed.chars().count() > min_chars {
        out.push(trimmed.to_string());
    }
}

/// Tokenize text into lowercase word tokens (alphanumeric runs).
///
/// Unicode-aware: non-Latin scripts tokenize without error, they just do
/// not benefit from the English stop-word filter.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Truncate a string to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_brackets() {
        let text = "[Music] Hello there.\nWelcome back. [Applause]";
        assert_eq!(normalize(text), "Hello there. Welcome back.");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let text = "one   two\n\nthree\t four";
        assert_eq!(normalize(text), "one two three four");
    }

    #[test]
    fn test_normalize_tolerates_unmatched_brackets() {
        assert_eq!(normalize("left [ open bracket"), "left [ open bracket");
        assert_eq!(normalize("stray ] close bracket"), "stray ] close bracket");
        assert_eq!(normalize("[a] keep [b] this"), "keep this");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n  "), "");
    }

    #[test]
    fn test_split_basic_sentences() {
        let text = "This is the first full sentence here. And here is the second one! \
                    Is this the third sentence maybe?";
        let sentences = split_sentences(text, 20);
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].starts_with("This is the first"));
        assert!(sentences[2].ends_with("maybe?"));
    }

    #[test]
    fn test_split_keeps_acronyms_together() {
        let text = "The U.S. government announced a new policy on spectrum auctions today. \
                    The decision was widely expected by industry analysts everywhere.";
        let sentences = split_sentences(text, 20);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("U.S. government"));
    }

    #[test]
    fn test_split_keeps_title_abbreviations_together() {
        let text = "We spoke with Mr. Johnson about the quarterly results yesterday. \
                    He expects revenue to grow substantially over the next year.";
        let sentences = split_sentences(text, 20);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Mr. Johnson"));
    }

    #[test]
    fn test_split_filters_short_fragments() {
        let text = "Ok. Sure. This sentence is clearly long enough to survive the filter.";
        let sentences = split_sentences(text, 20);
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].starts_with("This sentence"));
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_sentences("", 20).is_empty());
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        let tokens = tokenize("Hello, World! HTTP/2 rocks.");
        assert_eq!(tokens, vec!["hello", "world", "http", "2", "rocks"]);
    }

    #[test]
    fn test_tokenize_non_latin() {
        let tokens = tokenize("こんにちは 世界 hello");
        assert!(tokens.contains(&"hello".to_string()));
        assert!(!tokens.is_empty());
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
