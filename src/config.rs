//! Configuration Module
//!
//! Loads settings from environment variables, then lets command-line flags
//! override them.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::cli::Cli;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long fetched pages stay cached, in seconds
    pub cache_ttl_secs: u64,
    /// PokeAPI root URL, without a trailing slash
    pub base_url: String,
    /// Number of location areas per page
    pub page_size: u32,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_API_BASE_URL` - PokeAPI root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            http_timeout_secs: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
        .normalized()
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(ttl) = cli.cache_ttl {
            self.cache_ttl_secs = ttl;
        }
        if let Some(url) = &cli.base_url {
            self.base_url = url.clone();
        }
        if let Some(size) = cli.page_size {
            self.page_size = size;
        }
        if let Some(timeout) = cli.timeout {
            self.http_timeout_secs = timeout;
        }
        self.normalized()
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// HTTP timeout as a [`Duration`].
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    // Zero values would make the reaper spin or request empty pages.
    fn normalized(mut self) -> Self {
        if self.cache_ttl_secs == 0 {
            warn!("Cache TTL of 0s is not allowed, using {}s", DEFAULT_CACHE_TTL_SECS);
            self.cache_ttl_secs = DEFAULT_CACHE_TTL_SECS;
        }
        if self.page_size == 0 {
            warn!("Page size of 0 is not allowed, using {}", DEFAULT_PAGE_SIZE);
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.http_timeout_secs == 0 {
            warn!("HTTP timeout of 0s is not allowed, using {}s", DEFAULT_HTTP_TIMEOUT_SECS);
            self.http_timeout_secs = DEFAULT_HTTP_TIMEOUT_SECS;
        }
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout_secs, 10);
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEDEX_CACHE_TTL_SECS");
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_PAGE_SIZE");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");

        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let cli = Cli::parse_from([
            "pokedex",
            "--cache-ttl",
            "5",
            "--base-url",
            "http://localhost:8080/api/v2/",
            "--page-size",
            "50",
        ]);

        let config = Config::default().with_overrides(&cli);

        assert_eq!(config.cache_ttl_secs, 5);
        assert_eq!(config.base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.http_timeout_secs, 10);
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let cli = Cli::parse_from([
            "pokedex",
            "--cache-ttl",
            "0",
            "--page-size",
            "0",
            "--timeout",
            "0",
        ]);

        let config = Config::default().with_overrides(&cli);

        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout_secs, 10);
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
    }
}
