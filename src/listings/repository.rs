//! Repository trait describing a listing collection.

use async_trait::async_trait;
use thiserror::Error;

use super::models::Listing;

/// Maximum number of results returned per category by a text search.
pub const SEARCH_RESULT_LIMIT: usize = 20;

// == Repository Error ==
/// Failure reported by a listing collection.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The backing store could not be reached; surfaced as 503
    #[error("listing store unavailable: {0}")]
    Unavailable(String),
    /// The store was reached but the query itself failed; surfaced as 500
    #[error("query failed: {0}")]
    Query(String),
}

// == Listing Repository ==
/// A single listing collection (properties, lands or projects).
#[async_trait]
pub trait ListingRepository<T: Listing>: Send + Sync {
    /// Up to `limit` records with the given status, newest first.
    async fn find_recent(&self, status: &str, limit: usize) -> Result<Vec<T>, RepoError>;

    /// Ranked text search with a substring fallback, capped at `limit`.
    ///
    /// Results are ordered by relevance descending, then newest first.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<T>, RepoError>;
}
