//! Suggested-response templates keyed by (label, urgency).

use crate::types::{SentimentLabel, Urgency};

pub const POSITIVE: &str =
    "Great feedback! Consider thanking the user and encouraging them to share their experience.";

pub const NEUTRAL: &str =
    "Monitor this feedback. Follow up to understand their experience better.";

pub const CRITICAL: &str = "\u{1F6A8} URGENT: Respond immediately. Acknowledge the issue, apologize sincerely, and offer a direct contact (phone/email) for immediate resolution. Escalate to senior management.";

pub const HIGH: &str = "\u{26A0}\u{FE0F} HIGH PRIORITY: Respond within 1 hour. Show empathy, acknowledge the specific concern, and provide a clear action plan with timeline.";

pub const STANDARD: &str = "Address within 24 hours. Acknowledge the concern, investigate the issue, and provide a helpful response with next steps.";

/// Pick the response template for an analyzed item.
///
/// Only the label and urgency matter; the score itself never changes the choice.
pub fn recommend(label: SentimentLabel, urgency: Urgency) -> &'static str {
    match (label, urgency) {
        (SentimentLabel::Positive, _) => POSITIVE,
        (SentimentLabel::Neutral, _) => NEUTRAL,
        (SentimentLabel::Negative, Urgency::Critical) => CRITICAL,
        (SentimentLabel::Negative, Urgency::High) => HIGH,
        (SentimentLabel::Negative, _) => STANDARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_ignores_urgency() {
        assert_eq!(recommend(SentimentLabel::Positive, Urgency::Critical), POSITIVE);
        assert_eq!(recommend(SentimentLabel::Neutral, Urgency::High), NEUTRAL);
    }

    #[test]
    fn test_negative_templates() {
        assert_eq!(recommend(SentimentLabel::Negative, Urgency::Critical), CRITICAL);
        assert_eq!(recommend(SentimentLabel::Negative, Urgency::High), HIGH);
        assert_eq!(recommend(SentimentLabel::Negative, Urgency::Medium), STANDARD);
        assert_eq!(recommend(SentimentLabel::Negative, Urgency::Low), STANDARD);
    }

    #[test]
    fn test_critical_template_escalates() {
        assert!(CRITICAL.contains("apologize"));
        assert!(CRITICAL.contains("direct contact"));
        assert!(CRITICAL.contains("Escalate to senior management"));
        assert!(HIGH.contains("within 1 hour"));
        assert!(STANDARD.contains("within 24 hours"));
    }
}
