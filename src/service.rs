//! Alert service
//!
//! Glues the classifier, an [`AlertStore`] and a [`Notifier`] together: incoming
//! feedback is analyzed, stored as a new alert and routed to the channels the
//! user's [`NotificationSettings`] select. Workflow transitions load the alert,
//! apply the change and write it back.

use crate::alerts::{Alert, AlertFilter, AlertMetadata, AlertStats};
use crate::error::Result;
use crate::notify::{Notification, NotificationSettings, Notifier};
use crate::sentiment;
use crate::storage::AlertStore;
use crate::types::{AlertId, SourceId};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct AlertService {
    store: Arc<dyn AlertStore>,
    notifier: Arc<dyn Notifier>,
    settings: NotificationSettings,
}

impl AlertService {
    pub fn new(
        store: Arc<dyn AlertStore>,
        notifier: Arc<dyn Notifier>,
        settings: NotificationSettings,
    ) -> Self {
        Self {
            store,
            notifier,
            settings,
        }
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Analyze feedback, store it as a new alert and notify.
    ///
    /// Delivery failures are logged and do not fail ingestion; the alert is
    /// already stored at that point.
    pub async fn ingest(
        &self,
        source_id: SourceId,
        user_id: &str,
        content: &str,
        metadata: AlertMetadata,
    ) -> Result<Alert> {
        let analysis = sentiment::analyze(content);
        debug!(
            "Analyzed feedback from source {}: score={:.2} label={} urgency={}",
            source_id, analysis.score, analysis.label, analysis.urgency
        );

        let alert = Alert::from_analysis(source_id, user_id, content, analysis, metadata, Utc::now());
        self.store.store_alert(&alert).await?;
        info!("New {} alert {} for {}", alert.urgency, alert.id, user_id);

        for channel in self.settings.channels_for(&alert) {
            let notification = Notification::for_alert(&alert, channel);
            if let Err(e) = self.notifier.notify(&notification).await {
                warn!(
                    "Failed to deliver alert {} to {}: {}",
                    alert.id, notification.channel, e
                );
            }
        }

        Ok(alert)
    }

    pub async fn mark_reviewed(&self, id: AlertId) -> Result<Alert> {
        let mut alert = self.store.get_alert(id).await?;
        alert.mark_reviewed()?;
        self.store.update_alert(&alert).await?;
        info!("Alert {} marked reviewed", id);
        Ok(alert)
    }

    pub async fn resolve(&self, id: AlertId) -> Result<Alert> {
        let mut alert = self.store.get_alert(id).await?;
        alert.resolve(Utc::now())?;
        self.store.update_alert(&alert).await?;
        info!("Alert {} resolved", id);
        Ok(alert)
    }

    pub async fn list(&self, user_id: &str, filter: &AlertFilter) -> Result<Vec<Alert>> {
        self.store.list_alerts(user_id, filter).await
    }

    pub async fn stats(&self, user_id: &str) -> Result<AlertStats> {
        self.store.stats(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PulseError;
    use crate::notify::{Channel, MockNotifier};
    use crate::storage::InMemoryStore;
    use crate::types::{AlertStatus, Urgency};

    fn email_settings(threshold: Urgency) -> NotificationSettings {
        NotificationSettings {
            email_enabled: true,
            email_address: Some("ops@example.com".to_string()),
            urgency_threshold: threshold,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ingest_notifies_at_threshold() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n: &Notification| {
                n.urgency == Urgency::Critical
                    && n.channel == Channel::Email("ops@example.com".to_string())
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = AlertService::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(notifier),
            email_settings(Urgency::High),
        );

        let alert = service
            .ingest(
                SourceId::new(),
                "user-1",
                "This is terrible, I need help immediately",
                AlertMetadata::default(),
            )
            .await
            .unwrap();
        assert_eq!(alert.urgency, Urgency::Critical);
        assert_eq!(alert.status, AlertStatus::New);
    }

    #[tokio::test]
    async fn test_ingest_below_threshold_is_silent() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);

        let service = AlertService::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(notifier),
            email_settings(Urgency::High),
        );

        let alert = service
            .ingest(SourceId::new(), "user-1", "Not bad", AlertMetadata::default())
            .await
            .unwrap();
        assert_eq!(alert.urgency, Urgency::Medium);
    }

    #[tokio::test]
    async fn test_delivery_failure_does_not_fail_ingest() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(PulseError::Notification("smtp down".to_string())));

        let store = Arc::new(InMemoryStore::new());
        let service = AlertService::new(
            store.clone(),
            Arc::new(notifier),
            email_settings(Urgency::Low),
        );

        let alert = service
            .ingest(SourceId::new(), "user-1", "great", AlertMetadata::default())
            .await
            .unwrap();
        assert!(store.get_alert(alert.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_workflow_round_trip_through_store() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().returning(|_| Ok(()));

        let service = AlertService::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(notifier),
            NotificationSettings::default(),
        );

        let alert = service
            .ingest(SourceId::new(), "user-1", "awful", AlertMetadata::default())
            .await
            .unwrap();

        let reviewed = service.mark_reviewed(alert.id).await.unwrap();
        assert_eq!(reviewed.status, AlertStatus::Reviewed);

        let resolved = service.resolve(alert.id).await.unwrap();
        assert_eq!(resolved.status, AlertStatus::Resolved);
        assert!(resolved.resolved_at.is_some());

        let err = service.resolve(alert.id).await.unwrap_err();
        assert!(matches!(err, PulseError::InvalidTransition { .. }));

        let stats = service.stats("user-1").await.unwrap();
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.unresolved, 0);

        assert!(matches!(
            service.resolve(AlertId::new()).await.unwrap_err(),
            PulseError::AlertNotFound(_)
        ));
    }
}
