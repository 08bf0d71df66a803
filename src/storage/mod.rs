//! Storage layer for Pulse
//!
//! The dashboard persists alerts and sources in an external database; this crate
//! only defines the contract that collaborator has to satisfy and ships an
//! in-process implementation used by the CLI and the tests.

pub mod memory;

pub use memory::InMemoryStore;

use crate::alerts::{Alert, AlertFilter, AlertStats};
use crate::error::Result;
use crate::sources::Source;
use crate::types::{AlertId, SourceId};
use async_trait::async_trait;

/// Storage backend trait defining all required operations
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Store a new alert
    async fn store_alert(&self, alert: &Alert) -> Result<()>;

    /// Retrieve an alert by ID
    async fn get_alert(&self, id: AlertId) -> Result<Alert>;

    /// Replace an existing alert
    async fn update_alert(&self, alert: &Alert) -> Result<()>;

    /// List a user's alerts matching the filter, newest first
    async fn list_alerts(&self, user_id: &str, filter: &AlertFilter) -> Result<Vec<Alert>>;

    /// Summary counters across a user's alerts
    async fn stats(&self, user_id: &str) -> Result<AlertStats>;

    /// Store a new source
    async fn store_source(&self, source: &Source) -> Result<()>;

    /// Retrieve a source by ID
    async fn get_source(&self, id: SourceId) -> Result<Source>;

    /// List a user's sources, oldest first
    async fn list_sources(&self, user_id: &str) -> Result<Vec<Source>>;
}
