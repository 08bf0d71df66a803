//! Error types for Pulse
//!
//! The classifier is total and never fails. Everything around it (alert workflow,
//! storage, configuration, notification routing) reports failures through
//! [`PulseError`], using thiserror for the definitions and anyhow at the binary edge.

use crate::types::AlertStatus;
use thiserror::Error;

/// Main error type for Pulse operations
#[derive(Error, Debug)]
pub enum PulseError {
    /// Alert not found in the store
    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    /// Source not found in the store
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    /// Invalid alert or source ID format
    #[error("Invalid alert ID: {0}")]
    InvalidAlertId(#[from] uuid::Error),

    /// Workflow transition not allowed from the current status
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: AlertStatus, to: AlertStatus },

    /// Source failed validation
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// Resource already exists
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML rendering error
    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    /// Notification delivery failed
    #[error("Notification error: {0}")]
    Notification(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Pulse operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// Convert anyhow::Error to PulseError
impl From<anyhow::Error> for PulseError {
    fn from(err: anyhow::Error) -> Self {
        PulseError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PulseError::AlertNotFound("test-id".to_string());
        assert_eq!(err.to_string(), "Alert not found: test-id");
    }

    #[test]
    fn test_transition_display() {
        let err = PulseError::InvalidTransition {
            from: AlertStatus::Resolved,
            to: AlertStatus::Reviewed,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition: resolved -> reviewed"
        );
    }

    #[test]
    fn test_error_conversion() {
        let uuid_err = uuid::Uuid::parse_str("invalid");
        assert!(uuid_err.is_err());

        let pulse_err: PulseError = uuid_err.unwrap_err().into();
        assert!(matches!(pulse_err, PulseError::InvalidAlertId(_)));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: PulseError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, PulseError::Other(ref msg) if msg == "boom"));
    }
}
