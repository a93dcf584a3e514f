//! HTTP surface: router construction and shared state.

pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::ports::LookupCache;
use crate::services::LookupService;

use handlers::{handle_health, handle_lookup};

/// Application state shared across handlers.
pub struct AppState {
    pub lookup: LookupService,
    /// Kept alongside the orchestrator so the health probe can report
    /// cache readiness without a lookup.
    pub cache: Arc<dyn LookupCache>,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    // Permissive CORS: the UI is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/lookup/{username}", get(handle_lookup))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
