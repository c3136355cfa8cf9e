//! Cache Module
//!
//! Provides an in-memory cache with per-entry TTL and hit/miss statistics.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;

// == Public Constants ==
/// TTL in seconds applied when a caller does not pass one
pub const DEFAULT_TTL_SECONDS: u64 = 300;
