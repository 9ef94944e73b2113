//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

/// Sweep interval used when `AUCTION_INTERVAL` is absent or invalid
pub const DEFAULT_AUCTION_INTERVAL_SECS: u64 = 1;

/// Longest accepted sweep interval (one year); larger values overflow the timer
pub const MAX_AUCTION_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Expiration sweep interval in seconds, between 1 and `MAX_AUCTION_INTERVAL_SECS`
    pub auction_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `AUCTION_INTERVAL` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a Config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(3000),
            auction_interval: parse_interval_secs(lookup("AUCTION_INTERVAL").as_deref()),
        }
    }

    /// Returns the sweep interval as a Duration.
    pub fn auction_interval(&self) -> Duration {
        Duration::from_secs(self.auction_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            auction_interval: DEFAULT_AUCTION_INTERVAL_SECS,
        }
    }
}

/// Parses a whole number of seconds, falling back to the default when the
/// value is missing, unparsable, zero or longer than a year.
pub fn parse_interval_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0 && secs <= MAX_AUCTION_INTERVAL_SECS)
        .unwrap_or(DEFAULT_AUCTION_INTERVAL_SECS)
}
