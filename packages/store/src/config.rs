//! # Client configuration: `taskdeck.toml`
//!
//! Tells the client where the backend lives. On desktop the file is read from
//! the platform config directory; on the web the defaults are compiled in and
//! an environment value picked up at build time may override them.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://localhost:7265/api"
//! ```
//!
//! A missing or empty file is equivalent to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

const DEFAULT_BASE_URL: &str = "https://localhost:7265/api";

/// Top-level configuration stored in `taskdeck.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Apply an override (typically from [`API_URL_ENV`]). Blank values are ignored.
    pub fn with_override(self, base_url: Option<String>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskdeck.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.api.base_url.clone();
        Ok(config.with_base_url(base_url))
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
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "https://localhost:7265/api");
    }

    #[test]
    fn test_parse_base_url_strips_trailing_slash() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://tasks.internal:8080/api/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://tasks.internal:8080/api");
    }

    #[test]
    fn test_override() {
        let config = ClientConfig::default().with_override(Some("http://localhost:5000/api".into()));
        assert_eq!(config.api.base_url, "http://localhost:5000/api");

        let untouched = ClientConfig::default().with_override(Some("   ".into()));
        assert_eq!(untouched, ClientConfig::default());

        let untouched = ClientConfig::default().with_override(None);
        assert_eq!(untouched, ClientConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://example.test/api");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url"));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
