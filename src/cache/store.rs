//! Cache Store Module
//!
//! Main cache engine: HashMap storage with per-entry TTL and lazy expiry.

use std::collections::HashMap;

use regex::Regex;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot, DEFAULT_TTL_SECONDS};
use crate::error::Result;

// == Cache Store ==
/// Process-local key-value cache with TTL support.
///
/// Expired entries are never returned. They are removed on the next `get`
/// for their key, or by `cleanup_expired`.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds for entries stored without an explicit TTL
    default_ttl: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a value under `key`, overwriting any existing entry and resetting its TTL.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<u64>) {
        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired, recording a hit.
    /// Otherwise records a miss; an expired entry is removed on the way out.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Invalidate ==
    /// Removes a single entry. Returns whether anything was removed.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Invalidate Pattern ==
    /// Removes every entry whose key matches the regular expression `pattern`.
    ///
    /// The pattern is used as given: it is unanchored and not escaped, so
    /// `"popular"` matches `"popular_listings_6"` and `"."` matches every key.
    /// Returns the number of entries removed. A malformed pattern fails
    /// before anything is removed.
    pub fn invalidate_pattern(&mut self, pattern: &str) -> Result<usize> {
        let regex = Regex::new(pattern)?;
        let before = self.entries.len();
        self.entries.retain(|key, _| !regex.is_match(key));
        Ok(before - self.entries.len())
    }

    // == Clear ==
    /// Removes all entries and resets hit/miss counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics without touching the counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Counters are left untouched.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECONDS)
    }
}
