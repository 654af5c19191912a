//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{routing::get, Router};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::welcome))
        .nest("/clinics", clinic_routes())
        .route("/health", get(handlers::health::health_check))
        // Unknown paths and unsupported methods get the JSON error envelope
        .method_not_allowed_fallback(handlers::root::method_not_allowed)
        .fallback(handlers::root::not_found)
        .with_state(state)
}

/// Clinic search routes
fn clinic_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/get_dental_clinics",
            get(handlers::clinic::get_dental_clinics),
        )
        .route("/get_vet_clinics", get(handlers::clinic::get_vet_clinics))
}
