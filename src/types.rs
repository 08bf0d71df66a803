//! Core data types for Pulse
//!
//! Defines the classifier output ([`SentimentAnalysis`]) together with the
//! identifiers and enums that the alert workflow, store and presentation layer
//! share. Enum values serialize as lowercase strings so they line up with the
//! records the dashboard already persists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub Uuid);

impl AlertId {
    /// Create a new random alert ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an alert ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for monitored sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub Uuid);

impl SourceId {
    /// Create a new random source ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a source ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse tone of a piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Upper bound (exclusive) of the negative band
    pub const NEGATIVE_BELOW: f64 = -0.2;

    /// Lower bound (exclusive) of the positive band
    pub const POSITIVE_ABOVE: f64 = 0.2;

    /// Derive the label from a clamped score.
    ///
    /// Both band edges are exclusive, so exactly -0.2 and 0.2 are neutral.
    pub fn from_score(score: f64) -> Self {
        if score < Self::NEGATIVE_BELOW {
            SentimentLabel::Negative
        } else if score > Self::POSITIVE_ABOVE {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency tier; drives the expected response time.
///
/// Variants are declared in ascending order so the derived `Ord` can be used
/// for threshold comparisons (`Low < Medium < High < Critical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Scores below this escalate negative feedback straight to critical
    pub const CRITICAL_BELOW: f64 = -0.7;

    /// Scores below this (and not critical) are high urgency
    pub const HIGH_BELOW: f64 = -0.5;

    /// Assess urgency for an analyzed piece of feedback.
    ///
    /// Positive and neutral feedback is never escalated. Negative feedback is
    /// critical when any urgent word matched or the score is very low.
    pub fn assess(label: SentimentLabel, score: f64, urgent_matches: usize) -> Self {
        if label != SentimentLabel::Negative {
            return Urgency::Low;
        }

        if urgent_matches > 0 || score < Self::CRITICAL_BELOW {
            Urgency::Critical
        } else if score < Self::HIGH_BELOW {
            Urgency::High
        } else {
            Urgency::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            "critical" => Ok(Urgency::Critical),
            other => Err(format!(
                "unknown urgency '{}' (expected low, medium, high or critical)",
                other
            )),
        }
    }
}

/// Result of classifying one piece of feedback text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Clamped score in [-1.0, 1.0]
    pub score: f64,

    pub label: SentimentLabel,

    pub urgency: Urgency,

    /// Suggested response, chosen by (label, urgency)
    pub recommendation: String,
}

/// Resolution workflow status of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    New,
    Reviewed,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::New => "new",
            AlertStatus::Reviewed => "reviewed",
            AlertStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
