//! Listings aggregation service.
//!
//! Builds the cached "popular listings" aggregate and runs keyword search
//! across the three listing collections.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::models::{
    Category, Land, PopularListings, Project, Property, SearchResults, AVAILABLE_STATUS,
    ONGOING_STATUS,
};
use super::repository::{ListingRepository, SEARCH_RESULT_LIMIT};
use crate::cache::CacheStore;
use crate::error::{ListingsError, Result};

/// Cache store shared between the service and the HTTP layer.
pub type SharedCache = Arc<RwLock<CacheStore<PopularListings>>>;

/// Limit used by `GET /listings/popular` when none is given.
pub const DEFAULT_POPULAR_LIMIT: usize = 6;

/// Seconds a popular aggregate stays cached unless configured otherwise.
pub const POPULAR_TTL_SECONDS: u64 = 300;

const POPULAR_KEY_PREFIX: &str = "popular_listings_";

/// Cache key for the popular aggregate of a given limit.
pub fn popular_cache_key(limit: usize) -> String {
    format!("{}{}", POPULAR_KEY_PREFIX, limit)
}

// == Listings Service ==
/// Aggregates the three listing collections behind the shared cache.
///
/// Cloning is cheap: every field is a shared handle.
#[derive(Clone)]
pub struct ListingsService {
    properties: Arc<dyn ListingRepository<Property>>,
    lands: Arc<dyn ListingRepository<Land>>,
    projects: Arc<dyn ListingRepository<Project>>,
    /// Store holding popular aggregates
    cache: SharedCache,
    /// TTL in seconds for popular aggregates
    popular_ttl: u64,
}

impl ListingsService {
    // == Constructor ==
    /// Creates a service over the given collections and cache, with the
    /// default popular TTL of 300 seconds.
    pub fn new(
        properties: Arc<dyn ListingRepository<Property>>,
        lands: Arc<dyn ListingRepository<Land>>,
        projects: Arc<dyn ListingRepository<Project>>,
        cache: SharedCache,
    ) -> Self {
        Self {
            properties,
            lands,
            projects,
            cache,
            popular_ttl: POPULAR_TTL_SECONDS,
        }
    }

    // == Popular TTL ==
    /// Overrides how long popular aggregates stay cached.
    pub fn with_popular_ttl(mut self, ttl_seconds: u64) -> Self {
        self.popular_ttl = ttl_seconds;
        self
    }

    // == Cache Handle ==
    /// Returns a handle to the store this service reads and writes.
    pub fn cache(&self) -> SharedCache {
        Arc::clone(&self.cache)
    }

    // == Popular ==
    /// Newest active listings from every collection, `ceil(limit / 3)` each.
    ///
    /// Served from the cache when a fresh aggregate for `limit` exists.
    /// Otherwise the three collections are queried concurrently; if any
    /// query fails the error is returned as-is and nothing is cached.
    pub async fn get_popular(&self, limit: usize) -> Result<PopularListings> {
        if limit == 0 {
            return Err(ListingsError::InvalidRequest(
                "limit must be a positive integer".to_string(),
            ));
        }

        let key = popular_cache_key(limit);

        if let Some(cached) = self.cache.write().await.get(&key) {
            debug!("Cache HIT for {}", key);
            return Ok(cached);
        }

        info!("Cache MISS for {} - querying listing collections", key);
        let started = Instant::now();
        let per_category = limit.div_ceil(3);

        let (properties, lands, projects) = tokio::try_join!(
            self.properties.find_recent(AVAILABLE_STATUS, per_category),
            self.lands.find_recent(AVAILABLE_STATUS, per_category),
            self.projects.find_recent(ONGOING_STATUS, per_category),
        )?;

        info!(
            "Popular listings aggregated in {}ms ({} properties, {} lands, {} projects)",
            started.elapsed().as_millis(),
            properties.len(),
            lands.len(),
            projects.len()
        );

        let result = PopularListings {
            properties,
            lands,
            projects,
        };

        self.cache
            .write()
            .await
            .set(key, result.clone(), Some(self.popular_ttl));

        Ok(result)
    }

    // == Search ==
    /// Keyword search over the selected category, or all three when `category` is None.
    ///
    /// A blank query returns every category empty without touching the
    /// repositories. Results are never cached.
    pub async fn search(&self, query: &str, category: Option<Category>) -> Result<SearchResults> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults::empty());
        }

        let wanted = |c: Category| category.map_or(true, |selected| selected == c);
        debug!(
            "Searching {} for '{}'",
            category.map_or("all categories", |c| c.as_str()),
            query
        );

        let properties = async {
            if wanted(Category::Properties) {
                self.properties
                    .search(query, SEARCH_RESULT_LIMIT)
                    .await
                    .map(Some)
            } else {
                Ok(None)
            }
        };
        let lands = async {
            if wanted(Category::Lands) {
                self.lands.search(query, SEARCH_RESULT_LIMIT).await.map(Some)
            } else {
                Ok(None)
            }
        };
        let projects = async {
            if wanted(Category::Projects) {
                self.projects
                    .search(query, SEARCH_RESULT_LIMIT)
                    .await
                    .map(Some)
            } else {
                Ok(None)
            }
        };

        let (properties, lands, projects) = tokio::try_join!(properties, lands, projects)?;

        Ok(SearchResults {
            properties,
            lands,
            projects,
        })
    }
}
