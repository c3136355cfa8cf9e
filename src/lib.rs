//! Estate Listings - real-estate listings service core
//!
//! A TTL response cache and the aggregation service that serves popular
//! listings and keyword search across properties, lands and projects.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod listings;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
