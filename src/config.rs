//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::DEFAULT_TTL_SECONDS;
use crate::listings::POPULAR_TTL_SECONDS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for cache entries stored without explicit TTL.
    ///
    /// Popular aggregates always carry `popular_ttl`, so this only affects
    /// entries written through `CacheStore::set` with `ttl: None`.
    pub default_ttl: u64,
    /// TTL in seconds for popular listing aggregates
    pub popular_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 disables the sweep
    pub cleanup_interval: u64,
    /// Optional JSON file with initial listings
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - TTL for untimed cache entries in seconds (default: 300)
    /// - `POPULAR_TTL` - Popular listings TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `LISTINGS_SEED` - Path to a seed JSON file (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: parse_var("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            popular_ttl: parse_var("POPULAR_TTL").unwrap_or(defaults.popular_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            seed_path: env::var_os("LISTINGS_SEED")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECONDS,
            popular_ttl: POPULAR_TTL_SECONDS,
            server_port: 3000,
            cleanup_interval: 60,
            seed_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.popular_ttl, 300);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment so parallel tests don't race on it
        env::remove_var("DEFAULT_TTL");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("LISTINGS_SEED");
        env::set_var("POPULAR_TTL", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.popular_ttl, 300);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
        assert!(config.seed_path.is_none());

        env::set_var("POPULAR_TTL", "120");
        env::set_var("LISTINGS_SEED", "/tmp/listings.json");
        let config = Config::from_env();
        assert_eq!(config.popular_ttl, 120);
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/listings.json")));

        env::remove_var("POPULAR_TTL");
        env::remove_var("LISTINGS_SEED");
    }
}
