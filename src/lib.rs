//! Pulse - Feedback Sentiment Triage
//!
//! Reviews incoming text feedback, tags it with a sentiment and urgency
//! classification, and tracks it through a resolution workflow:
//! - Deterministic lexicon-based sentiment and urgency classifier
//! - Alert records with a new/reviewed/resolved workflow
//! - Dashboard filtering and summary counters
//! - Urgency-threshold notification routing
//!
//! # Architecture
//!
//! - **Sentiment**: the pure classifier (`analyze`) and its fixed lexicons
//! - **Types**: classifier output, identifiers and shared enums
//! - **Alerts**: alert records, workflow transitions, filters and stats
//! - **Storage**: the `AlertStore` contract and an in-memory implementation
//! - **Notify**: channel routing and the `Notifier` delivery seam
//! - **Service**: `AlertService` wiring classifier, store and notifier together
//!
//! # Example
//!
//! ```ignore
//! use pulse_core::{AlertMetadata, AlertService, InMemoryStore, LogNotifier, SourceId};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pulse_core::Result<()> {
//!     let service = AlertService::new(
//!         Arc::new(InMemoryStore::new()),
//!         Arc::new(LogNotifier),
//!         Default::default(),
//!     );
//!
//!     let alert = service
//!         .ingest(SourceId::new(), "user-1", "Checkout is broken!", AlertMetadata::default())
//!         .await?;
//!     service.resolve(alert.id).await?;
//!     Ok(())
//! }
//! ```

pub mod alerts;
pub mod config;
pub mod demo;
pub mod error;
pub mod notify;
pub mod sentiment;
pub mod service;
pub mod sources;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use alerts::{Alert, AlertFilter, AlertMetadata, AlertStats, StatusFilter};
pub use crate::config::PulseConfig;
pub use error::{PulseError, Result};
pub use notify::{Channel, LogNotifier, Notification, NotificationSettings, Notifier};
pub use sentiment::{analyze, scan, LexiconMatches};
pub use service::AlertService;
pub use sources::{Source, SourceDraft, SourceType};
pub use storage::{AlertStore, InMemoryStore};
pub use types::{AlertId, AlertStatus, SentimentAnalysis, SentimentLabel, SourceId, Urgency};
