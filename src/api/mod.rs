//! API Module
//!
//! HTTP handlers and routing for the listings REST API.
//!
//! # Endpoints
//! - `GET /listings/popular` - Popular listings from every category
//! - `GET /listings/search` - Keyword search
//! - `GET /listings/cache/stats` - Cache statistics
//! - `GET /listings/cache/clear` - Clear the cache
//! - `POST /listings/cache/invalidate` - Invalidate by key or pattern
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
