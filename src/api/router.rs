//! Router setup and configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, identifier, profile};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Identifier routes
    let identifier_routes = Router::new()
        .route("/generate", get(identifier::generate))
        .route("/validate", post(identifier::validate));

    // Profile registry routes
    let profile_routes = Router::new()
        .route("/list", get(profile::list_profiles))
        .route("/get", get(profile::get_profile));

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .nest("/v1/identifier", identifier_routes)
        .nest("/v1/profile", profile_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
