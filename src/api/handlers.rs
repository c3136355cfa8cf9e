//! API Handlers
//!
//! HTTP request handlers for each listings endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{CacheStore, StatsSnapshot};
use crate::config::Config;
use crate::error::Result;
use crate::listings::{ListingsSeed, ListingsService, PopularListings, SearchResults, SharedCache};
use crate::models::{
    HealthResponse, InvalidateRequest, InvalidateResponse, InvalidateTarget, MessageResponse,
    PopularQuery, SearchQuery,
};

/// Application state shared across all handlers.
///
/// The cache handle is the same store the service reads and writes, so the
/// introspection endpoints observe exactly what `get_popular` uses.
#[derive(Clone)]
pub struct AppState {
    /// Aggregation service
    pub service: ListingsService,
    /// Shared cache store
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: ListingsService) -> Self {
        let cache = service.cache();
        Self { service, cache }
    }

    /// Creates a new AppState from configuration and seed data.
    pub fn from_config(config: &Config, seed: ListingsSeed) -> Self {
        let cache: SharedCache = Arc::new(RwLock::new(CacheStore::new(config.default_ttl)));
        let service = seed.into_service(cache).with_popular_ttl(config.popular_ttl);
        Self::new(service)
    }
}

/// Handler for GET /listings/popular
pub async fn popular_handler(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<Json<PopularListings>> {
    let popular = state.service.get_popular(query.limit()).await?;
    Ok(Json(popular))
}

/// Handler for GET /listings/search
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>> {
    let category = query.category()?;
    let results = state.service.search(query.query()?, category).await?;
    Ok(Json(results))
}

/// Handler for GET /listings/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsSnapshot> {
    let cache = state.cache.read().await;
    Json(cache.stats())
}

/// Handler for GET /listings/cache/clear
pub async fn cache_clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cache.write().await.clear();
    info!("Cache cleared");
    Json(MessageResponse::new("Cache cleared successfully"))
}

/// Handler for POST /listings/cache/invalidate
pub async fn cache_invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    let target = req.target()?;
    let mut cache = state.cache.write().await;

    let removed = match target {
        InvalidateTarget::Key(key) => usize::from(cache.invalidate(key)),
        InvalidateTarget::Pattern(pattern) => cache.invalidate_pattern(pattern)?,
    };

    info!("Invalidated {} cache entries for {:?}", removed, target);
    Ok(Json(InvalidateResponse { removed }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
