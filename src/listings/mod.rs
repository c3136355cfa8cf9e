//! Listings Module
//!
//! Listing records, the repository seam, and the aggregation service that
//! serves popular listings through the cache and fans out keyword search.

pub mod memory;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;

pub use memory::InMemoryRepository;
pub use models::{Category, Land, Listing, PopularListings, Project, Property, SearchResults};
pub use repository::{ListingRepository, RepoError, SEARCH_RESULT_LIMIT};
pub use seed::ListingsSeed;
pub use service::{
    popular_cache_key, ListingsService, SharedCache, DEFAULT_POPULAR_LIMIT, POPULAR_TTL_SECONDS,
};
