//! Classifier contract tests
//!
//! Literal feedback scenarios plus property tests for the invariants every
//! analysis must satisfy.

use proptest::prelude::*;
use pulse_core::sentiment::{lexicon, recommendation};
use pulse_core::{analyze, SentimentLabel, Urgency};

#[test]
fn test_refund_demand_is_medium() {
    let analysis = analyze("Your product is broken and I want my money back NOW!");
    assert!((analysis.score - (-0.3)).abs() < 1e-12);
    assert_eq!(analysis.label, SentimentLabel::Negative);
    assert_eq!(analysis.urgency, Urgency::Medium);
    assert_eq!(analysis.recommendation, recommendation::STANDARD);
}

#[test]
fn test_urgent_word_escalates_to_critical() {
    let analysis = analyze(
        "This is absolutely terrible! Your customer service is the worst I have ever \
         experienced. I need this fixed immediately or I want a full refund. This is unacceptable!",
    );
    assert_eq!(analysis.label, SentimentLabel::Negative);
    assert_eq!(analysis.urgency, Urgency::Critical);
    assert_eq!(analysis.recommendation, recommendation::CRITICAL);
}

#[test]
fn test_praise_is_positive() {
    let analysis = analyze("Love the new features! Great job team!");
    assert!((analysis.score - 0.6).abs() < 1e-12);
    assert_eq!(analysis.label, SentimentLabel::Positive);
    assert_eq!(analysis.urgency, Urgency::Low);
    assert_eq!(analysis.recommendation, recommendation::POSITIVE);
}

#[test]
fn test_empty_input() {
    let analysis = analyze("");
    assert_eq!(analysis.score, 0.0);
    assert_eq!(analysis.label, SentimentLabel::Neutral);
    assert_eq!(analysis.urgency, Urgency::Low);
    assert_eq!(analysis.recommendation, recommendation::NEUTRAL);
}

#[test]
fn test_substring_matching_counts_every_occurrence() {
    // "badly" contains "bad" twice over
    let analysis = analyze("badly badly");
    assert!((analysis.score - (-0.6)).abs() < 1e-12);
    assert_eq!(analysis.label, SentimentLabel::Negative);
    assert_eq!(analysis.urgency, Urgency::High);
    assert_eq!(analysis.recommendation, recommendation::HIGH);
}

#[test]
fn test_substring_false_positive_is_preserved() {
    // "whatever" contains "hate"
    let analysis = analyze("whatever");
    assert!((analysis.score - (-0.3)).abs() < 1e-12);
    assert_eq!(analysis.label, SentimentLabel::Negative);
}

#[test]
fn test_urgent_word_without_negative_tone_stays_low() {
    let analysis = analyze("Encountered a few issues but nothing major.");
    assert_eq!(analysis.label, SentimentLabel::Neutral);
    assert_eq!(analysis.urgency, Urgency::Low);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(analyze("GREAT"), analyze("great"));
    assert_eq!(analyze("Terrible, URGENT"), analyze("terrible, urgent"));
}

fn lexicon_word() -> impl Strategy<Value = &'static str> {
    let words: Vec<&'static str> = lexicon::NEGATIVE_WORDS
        .iter()
        .chain(lexicon::POSITIVE_WORDS)
        .chain(lexicon::URGENT_WORDS)
        .copied()
        .collect();
    prop::sample::select(words)
}

/// Feedback-like text: filler words interleaved with lexicon words
fn feedback_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            lexicon_word().prop_map(String::from),
            "[a-zA-Z!?.,]{1,10}",
        ],
        0..24,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_score_in_range(text in feedback_text()) {
        let analysis = analyze(&text);
        prop_assert!((-1.0..=1.0).contains(&analysis.score));
    }

    #[test]
    fn prop_score_in_range_for_any_string(text in any::<String>()) {
        let analysis = analyze(&text);
        prop_assert!((-1.0..=1.0).contains(&analysis.score));
    }

    #[test]
    fn prop_label_follows_score(text in feedback_text()) {
        let analysis = analyze(&text);
        prop_assert_eq!(analysis.label, SentimentLabel::from_score(analysis.score));
    }

    #[test]
    fn prop_non_negative_is_low(text in feedback_text()) {
        let analysis = analyze(&text);
        if analysis.label != SentimentLabel::Negative {
            prop_assert_eq!(analysis.urgency, Urgency::Low);
        }
    }

    #[test]
    fn prop_negative_with_urgent_word_is_critical(
        text in feedback_text(),
        urgent in prop::sample::select(lexicon::URGENT_WORDS.to_vec()),
    ) {
        let analysis = analyze(&format!("{} {}", text, urgent));
        if analysis.label == SentimentLabel::Negative {
            prop_assert_eq!(analysis.urgency, Urgency::Critical);
        }
    }

    #[test]
    fn prop_idempotent(text in any::<String>()) {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    #[test]
    fn prop_ascii_case_insensitive(text in "[a-zA-Z !.,]{0,64}") {
        prop_assert_eq!(analyze(&text.to_uppercase()), analyze(&text.to_lowercase()));
    }

    #[test]
    fn prop_recommendation_keyed_by_label_and_urgency(text in feedback_text()) {
        let analysis = analyze(&text);
        prop_assert_eq!(
            analysis.recommendation.as_str(),
            recommendation::recommend(analysis.label, analysis.urgency)
        );
    }
}
