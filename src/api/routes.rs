//! API Routes
//!
//! Configures the Axum router with all listings endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_clear_handler, cache_invalidate_handler, cache_stats_handler, health_handler,
    popular_handler, search_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /listings/popular?limit=N` - Popular listings, cached per limit
/// - `GET /listings/search?q=&type=` - Keyword search across categories
/// - `GET /listings/cache/stats` - Cache statistics
/// - `GET /listings/cache/clear` - Drop all cached entries and reset counters
/// - `POST /listings/cache/invalidate` - Drop entries by key or pattern
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (the browser frontend is served separately)
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let listings = Router::new()
        .route("/popular", get(popular_handler))
        .route("/search", get(search_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/clear", get(cache_clear_handler))
        .route("/cache/invalidate", post(cache_invalidate_handler));

    Router::new()
        .nest("/listings", listings)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::listings::ListingsSeed;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::from_config(&Config::default(), ListingsSeed::default());
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_popular_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/listings/popular")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/listings/cache/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalidate_requires_post() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/listings/cache/invalidate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
