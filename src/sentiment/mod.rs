//! Lexicon-based sentiment and urgency classifier
//!
//! Turns raw feedback text into a [`SentimentAnalysis`]: a clamped score, a
//! sentiment label, an urgency tier and a suggested response. The classifier is
//! a pure function over the fixed tables in [`lexicon`]; it holds no state and
//! never fails, so it can be called from any number of tasks at once.
//!
//! # Scoring
//!
//! Every occurrence of a negative word subtracts 0.3 and every occurrence of a
//! positive word adds 0.3, word by word in table order. Urgent words only count
//! once each. The score is then clamped to [-1.0, 1.0].
//!
//! ```
//! use pulse_core::sentiment::analyze;
//! use pulse_core::{SentimentLabel, Urgency};
//!
//! let analysis = analyze("Love the new features! Great job team!");
//! assert_eq!(analysis.label, SentimentLabel::Positive);
//! assert_eq!(analysis.urgency, Urgency::Low);
//! ```

pub mod lexicon;
pub mod recommendation;

use crate::types::{SentimentAnalysis, SentimentLabel, Urgency};
use serde::Serialize;

/// Raw lexicon hits for a piece of text, before clamping and labelling
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexiconMatches {
    /// Unclamped score accumulated from the negative and positive tables
    pub raw_score: f64,

    /// Total occurrences of negative words
    pub negative_count: usize,

    /// Total occurrences of positive words
    pub positive_count: usize,

    /// Urgent words present in the text (each counted once)
    pub urgent_words: Vec<&'static str>,

    /// Per-word occurrence counts for every word that matched, in table order
    pub hits: Vec<(&'static str, usize)>,
}

impl LexiconMatches {
    /// Number of distinct urgent words present
    pub fn urgent_count(&self) -> usize {
        self.urgent_words.len()
    }

    /// Score clamped to [-1.0, 1.0]
    pub fn clamped_score(&self) -> f64 {
        self.raw_score.clamp(-1.0, 1.0)
    }
}

/// Scan text against all three lexicons.
///
/// The score is accumulated one word at a time (`score - count * 0.3`) in
/// table order so that repeated hits land on the same double value that
/// previously stored alerts carry.
pub fn scan(text: &str) -> LexiconMatches {
    let lowered = text.to_lowercase();
    let mut matches = LexiconMatches::default();
    let mut score = 0.0_f64;

    for &word in lexicon::NEGATIVE_WORDS {
        let count = lexicon::occurrences(&lowered, word);
        matches.negative_count += count;
        score -= count as f64 * lexicon::WORD_WEIGHT;
        if count > 0 {
            matches.hits.push((word, count));
        }
    }

    for &word in lexicon::POSITIVE_WORDS {
        let count = lexicon::occurrences(&lowered, word);
        matches.positive_count += count;
        score += count as f64 * lexicon::WORD_WEIGHT;
        if count > 0 {
            matches.hits.push((word, count));
        }
    }

    matches.urgent_words = lexicon::URGENT_WORDS
        .iter()
        .copied()
        .filter(|word| lowered.contains(word))
        .collect();

    matches.raw_score = score;
    matches
}

/// Classify feedback text.
///
/// Total over every input: empty or non-matching text is neutral with low urgency.
pub fn analyze(text: &str) -> SentimentAnalysis {
    let matches = scan(text);
    let score = matches.clamped_score();
    let label = SentimentLabel::from_score(score);
    let urgency = Urgency::assess(label, score, matches.urgent_count());

    SentimentAnalysis {
        score,
        label,
        urgency,
        recommendation: recommendation::recommend(label, urgency).to_string(),
    }
}
