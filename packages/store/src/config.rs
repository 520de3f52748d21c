//! # Client configuration — `projecthub.toml`
//!
//! Deployment-time settings for the front-end, read at startup where the
//! platform allows (native shells) or compiled in as defaults (web).
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8082"
//!
//! [notifications]
//! refresh_interval_secs = 30   # 0 disables the unread-badge refresh
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or
//! empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `projecthub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectHubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, no trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8082".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Notification badge behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// How often the navbar refreshes the unread count. 0 disables it.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u32,
}

fn default_refresh_interval() -> u32 {
    30
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl ProjectHubConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            notifications: NotificationsConfig::default(),
        }
    }

    /// Builder method to set the badge refresh interval.
    pub fn with_refresh_interval(mut self, secs: u32) -> Self {
        self.notifications.refresh_interval_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "projecthub.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_equals_defaults() {
        let config = ProjectHubConfig::from_toml("").unwrap();
        assert_eq!(config, ProjectHubConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8082");
        assert_eq!(config.notifications.refresh_interval_secs, 30);
    }

    #[test]
    fn toml_roundtrip() {
        let config =
            ProjectHubConfig::new("https://pm.example.com".to_string()).with_refresh_interval(0);
        let parsed = ProjectHubConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.notifications.refresh_interval_secs, 0);
    }
}
