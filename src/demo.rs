//! Demo feedback used to populate an empty dashboard.

use crate::alerts::{Alert, AlertMetadata};
use crate::error::Result;
use crate::sentiment::analyze;
use crate::sources::{Source, SourceDraft, SourceType};
use crate::storage::AlertStore;
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Feedback texts the "simulate" action draws from
pub const SAMPLE_FEEDBACK: &[&str] = &[
    "Your product is broken and I want my money back NOW!",
    "Pretty good experience overall, would recommend.",
    "The worst service ever. I am so frustrated and angry!",
    "Not bad, could use some improvements.",
];

struct SeedAlert {
    content: &'static str,
    author: &'static str,
    platform: &'static str,
    url: &'static str,
    age: Duration,
    reviewed: bool,
    resolved_after: Option<Duration>,
}

fn seed_alerts() -> Vec<SeedAlert> {
    vec![
        SeedAlert {
            content: "This is absolutely terrible! Your customer service is the worst I have ever experienced. I need this fixed immediately or I want a full refund. This is unacceptable!",
            author: "John Smith",
            platform: "Twitter",
            url: "https://twitter.com/example",
            age: Duration::minutes(30),
            reviewed: false,
            resolved_after: None,
        },
        SeedAlert {
            content: "Really disappointed with the recent update. The app keeps crashing and I lost all my data. Not happy at all.",
            author: "Sarah Johnson",
            platform: "App Store",
            url: "https://apps.apple.com/review/123",
            age: Duration::hours(2),
            reviewed: false,
            resolved_after: None,
        },
        SeedAlert {
            content: "The service is okay but could be better. Encountered a few issues but nothing major.",
            author: "Mike Chen",
            platform: "Reddit",
            url: "https://reddit.com/r/example",
            age: Duration::hours(5),
            reviewed: true,
            resolved_after: None,
        },
        SeedAlert {
            content: "Love the new features! This is exactly what I needed. Great job team!",
            author: "Emily Davis",
            platform: "Google Reviews",
            url: "https://google.com/review/456",
            age: Duration::hours(24),
            reviewed: false,
            resolved_after: Some(Duration::hours(4)),
        },
    ]
}

/// Store the demo sources and alerts for `user_id`.
///
/// Returns the seeded sources; alerts are attached to them round-robin.
pub async fn seed(store: &dyn AlertStore, user_id: &str, now: DateTime<Utc>) -> Result<Vec<Source>> {
    let mut sources = Vec::new();
    for (name, source_type, url) in [
        ("Brand mentions", SourceType::Social, "https://twitter.com/search?q=pulse"),
        ("App reviews", SourceType::Review, "https://apps.apple.com/app/pulse"),
        ("Community forum", SourceType::Forum, "https://reddit.com/r/example"),
    ] {
        let source = SourceDraft::new(name, source_type, url).build(user_id, now)?;
        store.store_source(&source).await?;
        sources.push(source);
    }

    for (i, seed) in seed_alerts().into_iter().enumerate() {
        let created_at = now - seed.age;
        let mut alert = Alert::from_analysis(
            sources[i % sources.len()].id,
            user_id,
            seed.content,
            analyze(seed.content),
            AlertMetadata::new(seed.author, seed.platform).with_url(seed.url),
            created_at,
        );
        if seed.reviewed {
            alert.mark_reviewed()?;
        }
        if let Some(after) = seed.resolved_after {
            alert.resolve(created_at + after)?;
        }
        store.store_alert(&alert).await?;
    }

    debug!("Seeded {} sources for {}", sources.len(), user_id);
    Ok(sources)
}

/// Pick a random sample feedback text
pub fn random_feedback<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_FEEDBACK
        .choose(rng)
        .copied()
        .unwrap_or(SAMPLE_FEEDBACK[0])
}
