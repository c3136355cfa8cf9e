//! Request and Response models for the listings API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query strings and bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{InvalidateRequest, InvalidateTarget, PopularQuery, SearchQuery};
pub use responses::{ErrorResponse, HealthResponse, InvalidateResponse, MessageResponse};
