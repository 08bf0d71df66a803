//! Dashboard filtering and summary counters

use super::Alert;
use crate::types::{AlertStatus, Urgency};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status tab selected on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    New,
    Reviewed,
    Resolved,
}

impl StatusFilter {
    pub fn matches(&self, status: AlertStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::New => status == AlertStatus::New,
            StatusFilter::Reviewed => status == AlertStatus::Reviewed,
            StatusFilter::Resolved => status == AlertStatus::Resolved,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::All => "all",
            StatusFilter::New => "new",
            StatusFilter::Reviewed => "reviewed",
            StatusFilter::Resolved => "resolved",
        };
        f.write_str(s)
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "new" => Ok(StatusFilter::New),
            "reviewed" => Ok(StatusFilter::Reviewed),
            "resolved" => Ok(StatusFilter::Resolved),
            other => Err(format!(
                "unknown status '{}' (expected all, new, reviewed or resolved)",
                other
            )),
        }
    }
}

/// Search box plus status tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertFilter {
    /// Case-insensitive needle matched against content and author
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub status: StatusFilter,
}

impl AlertFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Does the alert pass both the search and the status tab?
    pub fn matches(&self, alert: &Alert) -> bool {
        self.matches_search(alert) && self.status.matches(alert.status)
    }

    fn matches_search(&self, alert: &Alert) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        alert.content.to_lowercase().contains(&needle)
            || alert
                .metadata
                .author
                .as_ref()
                .is_some_and(|author| author.to_lowercase().contains(&needle))
    }
}

/// Summary counters shown above the alert list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStats {
    pub total: usize,

    /// Critical alerts that are still open
    pub critical: usize,

    pub unresolved: usize,
    pub resolved: usize,
}

impl AlertStats {
    pub fn from_alerts<'a>(alerts: impl IntoIterator<Item = &'a Alert>) -> Self {
        alerts.into_iter().fold(Self::default(), |mut stats, alert| {
            stats.total += 1;
            if alert.is_open() {
                stats.unresolved += 1;
                if alert.urgency == Urgency::Critical {
                    stats.critical += 1;
                }
            } else {
                stats.resolved += 1;
            }
            stats
        })
    }
}
