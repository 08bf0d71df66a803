//! Monitored feedback sources
//!
//! A [`Source`] is a place feedback is collected from (a review site, a social
//! feed, a forum). Fetching from it is an ingestion concern and lives outside
//! this crate; here sources are only described, validated and stored.

use crate::error::{PulseError, Result};
use crate::types::SourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of place a source monitors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Review,
    #[default]
    Social,
    Forum,
    Other,
}

/// A monitored feedback source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub url: String,
    pub keywords: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// In-progress source, as filled in before submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDraft {
    pub name: String,
    pub source_type: SourceType,
    pub url: String,
    keywords: Vec<String>,
}

impl SourceDraft {
    pub fn new(name: impl Into<String>, source_type: SourceType, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type,
            url: url.into(),
            keywords: Vec::new(),
        }
    }

    /// Add a keyword; blank input and duplicates are ignored.
    ///
    /// Returns whether the keyword was added.
    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() || self.keywords.iter().any(|k| k == keyword) {
            return false;
        }
        self.keywords.push(keyword.to_string());
        true
    }

    pub fn remove_keyword(&mut self, keyword: &str) {
        self.keywords.retain(|k| k != keyword);
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Validate and turn the draft into an active source
    pub fn build(self, user_id: impl Into<String>, now: DateTime<Utc>) -> Result<Source> {
        if self.name.trim().is_empty() {
            return Err(PulseError::InvalidSource("name is required".to_string()));
        }
        if self.url.trim().is_empty() {
            return Err(PulseError::InvalidSource("url is required".to_string()));
        }

        Ok(Source {
            id: SourceId::new(),
            user_id: user_id.into(),
            name: self.name,
            source_type: self.source_type,
            url: self.url,
            keywords: self.keywords,
            active: true,
            created_at: now,
            updated_at: now,
        })
    }
}
