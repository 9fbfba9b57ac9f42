//! # Client configuration: `brandtracker.toml`
//!
//! Defines the TOML file bundled with the web client (filename:
//! [`ClientConfig::filename`] = `"brandtracker.toml"`). It tells the client where the
//! backend lives and tunes a few view defaults.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [dashboard]
//! recent_mentions = 8       # mentions listed under "Recent Mentions"
//! refresh_delay_ms = 1000   # wait after a collection run before refetching
//!
//! [mentions]
//! page_size = 20
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML (de)serialisation, canonical filename, and [`ClientConfig::resolve`] which applies the build-time API URL override. |
//! | [`ApiConfig`] | Backend base URL (already including the `/api` prefix). |
//! | [`DashboardConfig`] | Recent-mention count and post-collection refresh delay. |
//! | [`MentionsConfig`] | Page size for the mentions list. |
//!
//! All structs derive `Default` so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `brandtracker.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub mentions: MentionsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_recent_mentions")]
    pub recent_mentions: u32,
    #[serde(default = "default_refresh_delay")]
    pub refresh_delay_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MentionsConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_recent_mentions() -> u32 {
    8
}

fn default_refresh_delay() -> u64 {
    1000
}

fn default_page_size() -> u32 {
    20
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_mentions: default_recent_mentions(),
            refresh_delay_ms: default_refresh_delay(),
        }
    }
}

impl Default for MentionsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "brandtracker.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse the bundled file and apply a build-time API URL override.
    ///
    /// A blank override is ignored. Parse errors are returned so the caller can log
    /// them before falling back to [`ClientConfig::default`].
    pub fn resolve(toml_src: &str, api_url_override: Option<&str>) -> Result<Self, toml::de::Error> {
        let config = Self::from_toml(toml_src)?;
        Ok(match api_url_override.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => config.with_api_url(url),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.dashboard.recent_mentions, 8);
        assert_eq!(config.dashboard.refresh_delay_ms, 1000);
        assert_eq!(config.mentions.page_size, 20);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://tracker.example.com/api"

            [mentions]
            page_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://tracker.example.com/api");
        assert_eq!(config.mentions.page_size, 50);
        assert_eq!(config.dashboard, DashboardConfig::default());
    }

    #[test]
    fn test_resolve_applies_override() {
        let config = ClientConfig::resolve("", Some("https://prod.example.com/api")).unwrap();
        assert_eq!(config.api.base_url, "https://prod.example.com/api");

        let config = ClientConfig::resolve("", Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_resolve_reports_bad_toml() {
        assert!(ClientConfig::resolve("[api\nbase_url = 1", None).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClientConfig::default().with_api_url("http://127.0.0.1:9000/api");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
