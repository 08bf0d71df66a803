//! Configuration for Pulse
//!
//! Values are layered with the `config` crate: built-in defaults, then an
//! optional TOML file, then `PULSE_`-prefixed environment variables using `__`
//! to reach nested keys:
//!
//! ```text
//! PULSE_NOTIFICATIONS__URGENCY_THRESHOLD=critical
//! PULSE_DASHBOARD__USER_ID=user-7
//! ```

use crate::error::{PulseError, Result};
use crate::notify::NotificationSettings;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
const ENV_PREFIX: &str = "PULSE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Presentation settings for the dashboard listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// User whose alerts and sources are shown
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Characters of feedback content shown per alert
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_user_id() -> String {
    "user-1".to_string()
}

fn default_preview_chars() -> usize {
    160
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            preview_chars: default_preview_chars(),
        }
    }
}

/// Default config file location (`<config_dir>/pulse/config.toml`)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pulse")
        .join("config.toml")
}

impl PulseConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// An explicitly given path must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (file_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path(), false),
        };
        debug!("Loading configuration from {}", file_path.display());

        let settings = Config::builder()
            .add_source(File::from(file_path.as_path()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: PulseConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no environment layering)
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(toml_str, config::FileFormat::Toml))
            .build()?;
        let config: PulseConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let n = &self.notifications;

        if n.email_enabled {
            match n.email_address.as_deref() {
                Some(addr) if addr.contains('@') => {}
                _ => {
                    return Err(invalid(
                        "notifications: email_enabled requires a valid email_address",
                    ))
                }
            }
        }

        if n.slack_enabled {
            match n.slack_webhook_url.as_deref() {
                Some(url) if url.starts_with("https://") => {}
                _ => {
                    return Err(invalid(
                        "notifications: slack_enabled requires an https:// slack_webhook_url",
                    ))
                }
            }
        }

        if self.dashboard.preview_chars == 0 {
            return Err(invalid("dashboard: preview_chars must be greater than 0"));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn invalid(msg: &str) -> PulseError {
    PulseError::Config(config::ConfigError::Message(msg.to_string()))
}
