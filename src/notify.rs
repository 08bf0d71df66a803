//! Notification routing
//!
//! Decides which channels an alert should be sent to based on the user's
//! [`NotificationSettings`]. Actual delivery (SMTP, Slack webhooks) belongs to an
//! external collaborator behind the [`Notifier`] trait; [`LogNotifier`] only
//! records what would have been sent.

use crate::alerts::Alert;
use crate::error::Result;
use crate::types::{AlertId, Urgency};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Per-user notification preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub email_enabled: bool,

    #[serde(default)]
    pub email_address: Option<String>,

    #[serde(default)]
    pub slack_enabled: bool,

    #[serde(default)]
    pub slack_webhook_url: Option<String>,

    /// Alerts below this urgency are never sent anywhere
    #[serde(default = "default_threshold")]
    pub urgency_threshold: Urgency,
}

fn default_threshold() -> Urgency {
    Urgency::High
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_enabled: false,
            email_address: None,
            slack_enabled: false,
            slack_webhook_url: None,
            urgency_threshold: default_threshold(),
        }
    }
}

impl NotificationSettings {
    /// Channels this alert should be delivered to
    pub fn channels_for(&self, alert: &Alert) -> Vec<Channel> {
        if alert.urgency < self.urgency_threshold {
            return Vec::new();
        }

        let mut channels = Vec::new();
        if self.email_enabled {
            if let Some(address) = &self.email_address {
                channels.push(Channel::Email(address.clone()));
            }
        }
        if self.slack_enabled {
            if let Some(webhook) = &self.slack_webhook_url {
                channels.push(Channel::Slack(webhook.clone()));
            }
        }
        channels
    }
}

/// Delivery target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "target")]
pub enum Channel {
    Email(String),
    Slack(String),
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email(address) => write!(f, "email:{}", address),
            Channel::Slack(_) => write!(f, "slack"),
        }
    }
}

/// One message bound for one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub alert_id: AlertId,
    pub channel: Channel,
    pub urgency: Urgency,
    pub summary: String,
}

impl Notification {
    const SUMMARY_CHARS: usize = 120;

    pub fn for_alert(alert: &Alert, channel: Channel) -> Self {
        let mut excerpt: String = alert.content.chars().take(Self::SUMMARY_CHARS).collect();
        if alert.content.chars().count() > Self::SUMMARY_CHARS {
            excerpt.push_str("...");
        }

        Self {
            alert_id: alert.id,
            channel,
            urgency: alert.urgency,
            summary: format!(
                "[{}] {} feedback from {}: {}",
                alert.urgency.as_str().to_uppercase(),
                alert.sentiment_label,
                alert.display_author(),
                excerpt
            ),
        }
    }
}

/// Delivers notifications to an external channel
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<()>;
}

/// Notifier that only logs what it would deliver
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        info!(
            alert = %notification.alert_id,
            channel = %notification.channel,
            urgency = %notification.urgency,
            "{}",
            notification.summary
        );
        Ok(())
    }
}
