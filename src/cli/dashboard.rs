//! Dashboard listing: seeded demo feedback, optional simulated alerts, stats

use super::helpers::{relative_time, truncate_chars, urgency_icon};
use super::OutputFormat;
use chrono::Utc;
use pulse_core::{
    demo, error::Result, AlertFilter, AlertMetadata, AlertService, InMemoryStore, LogNotifier,
    PulseConfig, StatusFilter,
};
use std::sync::Arc;
use tracing::debug;

/// Handle dashboard command
pub async fn handle(
    config: &PulseConfig,
    status: StatusFilter,
    search: Option<String>,
    simulate: usize,
    format: OutputFormat,
) -> Result<()> {
    let user_id = config.dashboard.user_id.as_str();
    let store = Arc::new(InMemoryStore::new());
    let sources = demo::seed(store.as_ref(), user_id, Utc::now()).await?;

    let service = AlertService::new(
        store,
        Arc::new(LogNotifier),
        config.notifications.clone(),
    );

    if simulate > 0 {
        debug!("Simulating {} alerts", simulate);
        let texts: Vec<&str> = {
            let mut rng = rand::thread_rng();
            (0..simulate)
                .map(|_| demo::random_feedback(&mut rng))
                .collect()
        };
        for text in texts {
            service
                .ingest(
                    sources[0].id,
                    user_id,
                    text,
                    AlertMetadata::new("Demo User", "Demo Platform"),
                )
                .await?;
        }
    }

    let filter = AlertFilter::new(search.unwrap_or_default(), status);
    let alerts = service.list(user_id, &filter).await?;
    let stats = service.stats(user_id).await?;

    if format == OutputFormat::Json {
        let value = serde_json::json!({ "stats": stats, "alerts": alerts });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!();
    println!("📊 Pulse dashboard ({})", user_id);
    println!(
        "   Total {}  •  Critical {}  •  Unresolved {}  •  Resolved {}",
        stats.total, stats.critical, stats.unresolved, stats.resolved
    );
    println!();

    if alerts.is_empty() {
        if filter.search.is_empty() {
            println!("   All caught up! No alerts to display.");
        } else {
            println!("   No alerts found. Try adjusting your search terms.");
        }
        return Ok(());
    }

    let now = Utc::now();
    for alert in &alerts {
        let platform = alert
            .metadata
            .platform
            .as_deref()
            .map(|p| format!("{} • ", p))
            .unwrap_or_default();
        println!(
            "{} {:<8} {:<8} {:<8} {}{}  ({})",
            urgency_icon(alert.urgency),
            alert.urgency.as_str().to_uppercase(),
            alert.sentiment_label,
            alert.status,
            platform,
            alert.display_author(),
            relative_time(alert.created_at, now)
        );
        println!(
            "   {}",
            truncate_chars(&alert.content, config.dashboard.preview_chars)
        );
        if let Some(rec) = &alert.recommendation {
            println!("   ↳ {}", rec);
        }
        println!("   id: {}", alert.id);
        println!();
    }

    Ok(())
}
