//! Client configuration
//!
//! Defaults are used whenever no override is given, mirroring how the site
//! falls back to a local backend when no URL was configured at build time.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_SESSION_KEY: &str = "clubsport_session";
/// Environment variable read by [`ClientConfig::from_env`] and by the frontend build.
pub const BACKEND_URL_VAR: &str = "CLUBSPORT_BACKEND_URL";

/// What to do with the stored token when the boot-time profile refresh fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshFailurePolicy {
    /// A 401 clears the session; any other failure keeps the token with an unknown profile.
    #[default]
    Adaptive,
    /// Always keep the token, drop only the cached profile.
    KeepToken,
    /// Always log the user out.
    ClearSession,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub session_key: String,
    pub refresh_failure: RefreshFailurePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            refresh_failure: RefreshFailurePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Uses `base_url` when it is set and non-blank, the default backend otherwise.
    pub fn with_base_url(base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        match base_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => config.base_url = url.trim_end_matches('/').to_string(),
            None => tracing::warn!(
                "{} is not configured, using default backend {}",
                BACKEND_URL_VAR,
                DEFAULT_BACKEND_URL
            ),
        }
        config
    }

    /// Reads [`BACKEND_URL_VAR`] from the process environment.
    pub fn from_env() -> Self {
        let value = std::env::var(BACKEND_URL_VAR).ok();
        Self::with_base_url(value.as_deref())
    }

    pub fn with_refresh_failure(mut self, policy: RefreshFailurePolicy) -> Self {
        self.refresh_failure = policy;
        self
    }

    /// Absolute URL of an API path (`/tournaments` -> `<base>/api/tournaments`).
    pub fn endpoint(&self, path: &str) -> String {
        let prefix = self.api_prefix.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}{}", self.base_url, prefix, path)
        } else {
            format!("{}{}/{}", self.base_url, prefix, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_falls_back_to_default() {
        assert_eq!(ClientConfig::with_base_url(None).base_url, DEFAULT_BACKEND_URL);
        assert_eq!(
            ClientConfig::with_base_url(Some("   ")).base_url,
            DEFAULT_BACKEND_URL
        );
    }

    #[test]
    fn test_endpoint_joins_prefix() {
        let config = ClientConfig::with_base_url(Some("https://api.club.fr/"));
        assert_eq!(
            config.endpoint("/tournaments"),
            "https://api.club.fr/api/tournaments"
        );
        assert_eq!(config.endpoint("news"), "https://api.club.fr/api/news");
    }
}
