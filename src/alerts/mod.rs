//! Alert records and resolution workflow
//!
//! An [`Alert`] is a piece of feedback merged with its [`SentimentAnalysis`]
//! and identity fields. Alerts move through `new -> reviewed -> resolved`;
//! `new -> resolved` is also allowed, and resolved is terminal.

pub mod filter;

pub use filter::{AlertFilter, AlertStats, StatusFilter};

use crate::error::{PulseError, Result};
use crate::types::{AlertId, AlertStatus, SentimentAnalysis, SentimentLabel, SourceId, Urgency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a piece of feedback came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Free-form fields supplied by ingestion, kept under their own key
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl AlertMetadata {
    pub fn new(author: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            platform: Some(platform.into()),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Feedback item with its classification and workflow state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub source_id: SourceId,
    pub user_id: String,

    /// Original feedback text
    pub content: String,

    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub urgency: Urgency,
    pub status: AlertStatus,

    #[serde(rename = "ai_recommendation")]
    pub recommendation: Option<String>,

    #[serde(default)]
    pub metadata: AlertMetadata,

    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Build a fresh alert from classifier output
    pub fn from_analysis(
        source_id: SourceId,
        user_id: impl Into<String>,
        content: impl Into<String>,
        analysis: SentimentAnalysis,
        metadata: AlertMetadata,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AlertId::new(),
            source_id,
            user_id: user_id.into(),
            content: content.into(),
            sentiment_score: analysis.score,
            sentiment_label: analysis.label,
            urgency: analysis.urgency,
            status: AlertStatus::New,
            recommendation: Some(analysis.recommendation),
            metadata,
            created_at: now,
            resolved_at: None,
        }
    }

    /// Mark a new alert as reviewed
    pub fn mark_reviewed(&mut self) -> Result<()> {
        match self.status {
            AlertStatus::New => {
                self.status = AlertStatus::Reviewed;
                Ok(())
            }
            from => Err(PulseError::InvalidTransition {
                from,
                to: AlertStatus::Reviewed,
            }),
        }
    }

    /// Resolve an open alert, stamping the resolution time
    pub fn resolve(&mut self, now: DateTime<Utc>) -> Result<()> {
        if !self.is_open() {
            return Err(PulseError::InvalidTransition {
                from: self.status,
                to: AlertStatus::Resolved,
            });
        }
        self.status = AlertStatus::Resolved;
        self.resolved_at = Some(now);
        Ok(())
    }

    /// Whether the alert still needs action
    pub fn is_open(&self) -> bool {
        self.status != AlertStatus::Resolved
    }

    /// Author name for display
    pub fn display_author(&self) -> &str {
        self.metadata.author.as_deref().unwrap_or("Anonymous")
    }
}
