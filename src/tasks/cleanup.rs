//! Expired Entry Sweep
//!
//! Background task that periodically purges expired cache entries, so
//! aggregates nobody asks for again do not sit in memory until the next read.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::listings::SharedCache;

/// Spawns a background task that periodically removes expired cache entries.
///
/// Returns `None` without spawning anything when `cleanup_interval_secs` is 0.
/// Hit/miss counters are not affected by the sweep.
///
/// # Example
/// ```ignore
/// let cache: SharedCache = Arc::new(RwLock::new(CacheStore::new(300)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// if let Some(handle) = cleanup_handle { handle.abort(); }
/// ```
pub fn spawn_cleanup_task(cache: SharedCache, cleanup_interval_secs: u64) -> Option<JoinHandle<()>> {
    if cleanup_interval_secs == 0 {
        info!("Expired entry sweep disabled");
        return None;
    }

    let interval = Duration::from_secs(cleanup_interval_secs);

    Some(tokio::spawn(async move {
        info!(
            "Starting expired entry sweep with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    }))
}
