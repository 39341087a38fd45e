use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::ConfigError;
use crate::content;

pub const DEFAULT_LOG_FILTER: &str = "info,batavia=debug";
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Server settings read from the environment (and `.env`, loaded by the binary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Overrides the leptos `site-addr` when set.
    pub bind_addr: Option<SocketAddr>,
    pub log_filter: String,
    /// Served under `/static`; its `logos/` subdirectory is served under `/logos`.
    pub static_dir: PathBuf,
    pub site_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            site_url: content::SITE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => Some(value.parse().map_err(|source| ConfigError::BindAddr {
                value: value.clone(),
                source,
            })?),
            None => None,
        };

        let log_filter = get("SITE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        if log_filter.contains(char::is_whitespace) {
            return Err(ConfigError::LogFilter(log_filter));
        }

        Ok(Self {
            bind_addr,
            log_filter,
            static_dir: get("SITE_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            site_url: get("SITE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(|| content::SITE_URL.to_string()),
        })
    }

    pub fn logos_dir(&self) -> PathBuf {
        self.static_dir.join("logos")
    }
}
