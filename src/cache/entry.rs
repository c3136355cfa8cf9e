//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant the value was stored
    pub stored_at: Instant,
    /// How long the value stays visible after `stored_at`
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds
    pub fn new(value: V, ttl_seconds: u64) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the elapsed time since it was stored is
    /// greater than or equal to its TTL, so a zero TTL is never visible.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }
}
