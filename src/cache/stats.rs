//! Cache Statistics Module
//!
//! Tracks hit and miss counters and renders read-only snapshots.

use serde::Serialize;

// == Cache Stats ==
/// Hit/miss counters over the lifetime of a store instance.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Hit rate as a percentage in `0.0..=100.0`, or 0.0 if no lookups happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Reset ==
    /// Sets both counters back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Hit rate with two decimals, exact ties rounded up (`1/32` is `"3.13%"`).
    fn format_hit_rate(&self) -> String {
        let total = u128::from(self.hits + self.misses);
        if total == 0 {
            return "0.00%".to_string();
        }
        // Hundredths of a percent, rounded half-up in integer arithmetic
        let hundredths = (u128::from(self.hits) * 20_000 + total) / (2 * total);
        format!("{}.{:02}%", hundredths / 100, hundredths % 100)
    }

    // == Snapshot ==
    /// Builds a serializable snapshot for the given store size.
    pub fn snapshot(&self, size: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            total: self.hits + self.misses,
            hit_rate: self.format_hit_rate(),
            size,
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time view of cache statistics, as reported by `GET /listings/cache/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    /// hits + misses
    pub total: u64,
    /// Percentage with two decimals, e.g. `"66.67%"`
    pub hit_rate: String,
    /// Entries currently held, expired-but-unpurged ones included
    pub size: usize,
}
