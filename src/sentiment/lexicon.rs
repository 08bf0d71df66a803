//! Fixed trigger-word tables for the sentiment classifier.
//!
//! Matching is plain substring matching on lower-cased text, not word-boundary
//! matching: "badly" hits "bad" and "whatever" hits "hate". Existing alerts were
//! scored this way, so the tables and the matching rule must stay as they are.

/// Words that pull the score down by [`WORD_WEIGHT`] per occurrence
pub const NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "worst",
    "horrible",
    "disappointed",
    "frustrated",
    "angry",
    "useless",
    "broken",
    "failed",
    "poor",
    "bad",
];

/// Words that push the score up by [`WORD_WEIGHT`] per occurrence
pub const POSITIVE_WORDS: &[&str] = &[
    "love",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "perfect",
    "best",
    "awesome",
    "outstanding",
];

/// Words that escalate negative feedback to critical when present at all
pub const URGENT_WORDS: &[&str] = &[
    "immediately",
    "urgent",
    "critical",
    "emergency",
    "asap",
    "serious",
    "major",
];

/// Score contribution of a single lexicon hit
pub const WORD_WEIGHT: f64 = 0.3;

/// Count non-overlapping occurrences of `word` in already lower-cased text
pub fn occurrences(lowered: &str, word: &str) -> usize {
    lowered.matches(word).count()
}
