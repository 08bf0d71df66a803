//! In-process alert store backed by `tokio::sync::RwLock` maps.

use super::AlertStore;
use crate::alerts::{Alert, AlertFilter, AlertStats};
use crate::error::{PulseError, Result};
use crate::sources::Source;
use crate::types::{AlertId, SourceId};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Alert store that keeps everything in memory for the life of the process
#[derive(Default)]
pub struct InMemoryStore {
    alerts: RwLock<HashMap<AlertId, Alert>>,
    sources: RwLock<HashMap<SourceId, Source>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlertStore for InMemoryStore {
    async fn store_alert(&self, alert: &Alert) -> Result<()> {
        let mut alerts = self.alerts.write().await;
        if alerts.contains_key(&alert.id) {
            return Err(PulseError::AlreadyExists(format!("alert {}", alert.id)));
        }
        debug!("Storing alert {} ({})", alert.id, alert.urgency);
        alerts.insert(alert.id, alert.clone());
        Ok(())
    }

    async fn get_alert(&self, id: AlertId) -> Result<Alert> {
        self.alerts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PulseError::AlertNotFound(id.to_string()))
    }

    async fn update_alert(&self, alert: &Alert) -> Result<()> {
        let mut alerts = self.alerts.write().await;
        match alerts.get_mut(&alert.id) {
            Some(existing) => {
                debug!("Updating alert {} -> {}", alert.id, alert.status);
                *existing = alert.clone();
                Ok(())
            }
            None => Err(PulseError::AlertNotFound(alert.id.to_string())),
        }
    }

    async fn list_alerts(&self, user_id: &str, filter: &AlertFilter) -> Result<Vec<Alert>> {
        let alerts = self.alerts.read().await;
        let mut matching: Vec<Alert> = alerts
            .values()
            .filter(|alert| alert.user_id == user_id && filter.matches(alert))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(
            "Listed {} of {} alerts for {} (status={}, search={:?})",
            matching.len(),
            alerts.len(),
            user_id,
            filter.status,
            filter.search
        );
        Ok(matching)
    }

    async fn stats(&self, user_id: &str) -> Result<AlertStats> {
        let alerts = self.alerts.read().await;
        Ok(AlertStats::from_alerts(
            alerts.values().filter(|alert| alert.user_id == user_id),
        ))
    }

    async fn store_source(&self, source: &Source) -> Result<()> {
        let mut sources = self.sources.write().await;
        if sources.contains_key(&source.id) {
            return Err(PulseError::AlreadyExists(format!("source {}", source.id)));
        }
        debug!("Storing source {} ({})", source.id, source.name);
        sources.insert(source.id, source.clone());
        Ok(())
    }

    async fn get_source(&self, id: SourceId) -> Result<Source> {
        self.sources
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PulseError::SourceNotFound(id.to_string()))
    }

    async fn list_sources(&self, user_id: &str) -> Result<Vec<Source>> {
        let sources = self.sources.read().await;
        let mut owned: Vec<Source> = sources
            .values()
            .filter(|source| source.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(owned)
    }
}
