//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Welcome text
//! - `GET  /health`  - Health check
//! - `/api/*`        - REST API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! Unknown paths and unsupported methods answer 404 with the JSON error body.

use crate::api;
use crate::api::handlers::{health_handler, home_handler, route_not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and state, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .fallback(route_not_found_handler)
        .method_not_allowed_fallback(route_not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
