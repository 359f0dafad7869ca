//! Settings structures for MAYA Search configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main settings structure, loaded once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub search: SearchSettings,
    pub filter: FilterSettings,
    pub cache: CacheSettings,
    pub suggest: SuggestSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that cannot be used at runtime
    pub fn validate(&self) -> Result<()> {
        for (name, secs) in [
            ("upstream.search_timeout", self.upstream.search_timeout),
            ("upstream.suggest_timeout", self.upstream.suggest_timeout),
        ] {
            if !secs.is_finite() || secs <= 0.0 {
                anyhow::bail!("{name} must be a positive number of seconds, got {secs}");
            }
        }
        Ok(())
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEARXNG_URL") {
            if !val.trim().is_empty() {
                self.upstream.base_url = val;
            }
        }
        if let Ok(val) = std::env::var("MAYA_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MAYA_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Settings for the outbound connection to the SearXNG instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Base URL of the aggregator, without a trailing path
    pub base_url: String,
    /// Timeout for `/search` calls in seconds
    pub search_timeout: f64,
    /// Timeout for `/autocompleter` calls in seconds
    pub suggest_timeout: f64,
    /// User agent sent upstream
    pub user_agent: String,
    /// Idle connections kept per host (0 = fresh connection per request)
    pub pool_max_idle_per_host: usize,
}

impl UpstreamSettings {
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.search_timeout)
    }

    pub fn suggest_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.suggest_timeout)
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            search_timeout: 30.0,
            suggest_timeout: 10.0,
            user_agent: format!("MAYA Search Engine/{}", crate::VERSION),
            pool_max_idle_per_host: 0,
        }
    }
}

/// Defaults applied to incoming search requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub default_category: String,
    pub default_language: String,
    /// Safe search level: 0 = off, 1 = moderate, 2 = strict
    pub default_safesearch: u8,
    /// Longest accepted query, in characters after trimming
    pub max_query_length: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_category: "general".to_string(),
            default_language: "en".to_string(),
            default_safesearch: 0,
            max_query_length: 500,
        }
    }
}

/// Result filter policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Only results from these engines are returned
    pub allowed_engines: Vec<String>,
    /// Host + path rules that drop a result
    pub deny: Vec<DenyRule>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            allowed_engines: vec![
                "google".to_string(),
                "wikipedia".to_string(),
                "wikidata".to_string(),
            ],
            deny: vec![DenyRule {
                domain: "quora.com".to_string(),
                path_fragments: vec![
                    "kaulantak-peeth".to_string(),
                    "ishaputra".to_string(),
                    "kaulantak_peeth".to_string(),
                ],
            }],
        }
    }
}

/// A result is dropped when its host is `domain` (or a subdomain of it)
/// and its path contains one of `path_fragments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenyRule {
    pub domain: String,
    pub path_fragments: Vec<String>,
}

/// `Cache-Control` max-age per route, in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub search: u32,
    pub suggest: u32,
    pub engines: u32,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            search: 300,
            suggest: 600,
            engines: 3600,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestSettings {
    pub max_suggestions: usize,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self { max_suggestions: 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.upstream.base_url, "http://localhost:8080");
        assert_eq!(settings.upstream.search_timeout(), Duration::from_secs(30));
        assert_eq!(settings.upstream.suggest_timeout(), Duration::from_secs(10));
        assert_eq!(settings.cache.search, 300);
        assert_eq!(settings.cache.suggest, 600);
        assert_eq!(settings.cache.engines, 3600);
        assert_eq!(settings.suggest.max_suggestions, 8);
    }

    #[test]
    fn test_endpoint_join() {
        let mut upstream = UpstreamSettings::default();
        upstream.base_url = "http://searx.local:8888/".to_string();
        assert_eq!(upstream.endpoint("/search"), "http://searx.local:8888/search");
        assert_eq!(
            upstream.endpoint("autocompleter"),
            "http://searx.local:8888/autocompleter"
        );
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
upstream:
  base_url: "http://10.0.0.2:8080"
filter:
  allowed_engines: ["bing"]
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.upstream.base_url, "http://10.0.0.2:8080");
        assert_eq!(settings.upstream.search_timeout, 30.0);
        assert_eq!(settings.filter.allowed_engines, vec!["bing".to_string()]);
        assert_eq!(settings.filter.deny.len(), 1);
        assert_eq!(settings.filter.deny[0].domain, "quora.com");
        assert_eq!(settings.search.max_query_length, 500);
    }

    #[test]
    fn test_invalid_timeouts_rejected() {
        assert!(Settings::default().validate().is_ok());

        for bad in ["-1", ".nan", ".inf", "0"] {
            let yaml = format!("upstream:\n  search_timeout: {bad}\n");
            let settings: Settings = serde_yaml::from_str(&yaml).unwrap();
            assert!(settings.validate().is_err(), "{bad}");
        }

        let mut settings = Settings::default();
        settings.upstream.suggest_timeout = -5.0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("upstream.suggest_timeout"));
    }

    #[test]
    fn test_from_file_validates() {
        let path = std::env::temp_dir().join(format!("maya-settings-{}.yml", std::process::id()));
        std::fs::write(&path, "upstream:\n  suggest_timeout: -2\n").unwrap();
        let result = Settings::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
