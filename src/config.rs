// src/config.rs

use std::time::Duration;

pub const EIA_BASE_URL: &str = "https://api.eia.gov";
pub const EIA_API_VERSION: &str = "v2";

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org";
pub const TMDB_API_VERSION: &str = "3";

/// Upper bound on how long one request may take, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport settings for a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
    /// Skips TLS certificate verification. Off unless the user passes `--insecure`.
    pub accept_invalid_certs: bool,
}

impl Config {
    pub fn new(base_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: api_version.into(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    /// EIA open-data API, v2.
    pub fn eia() -> Self {
        Self::new(EIA_BASE_URL, EIA_API_VERSION)
    }

    /// TMDB movie-metadata API, v3.
    pub fn tmdb() -> Self {
        Self::new(TMDB_BASE_URL, TMDB_API_VERSION)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_is_on_by_default() {
        assert!(!Config::eia().accept_invalid_certs);
        assert!(!Config::tmdb().accept_invalid_certs);
        assert_eq!(Config::eia().timeout, Duration::from_secs(10));
    }

    #[test]
    fn builders_override_defaults() {
        let cfg = Config::eia()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2))
            .with_accept_invalid_certs(true);
        assert_eq!(cfg.base_url, "http://127.0.0.1:9");
        assert_eq!(cfg.api_version, "v2");
        assert_eq!(cfg.timeout, Duration::from_secs(2));
        assert!(cfg.accept_invalid_certs);
    }
}
