//! Sipboard
//!
//! A shared scoreboard for a drinking game: a flat-file JSON storage service and
//! a polling dashboard client.

pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use store::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Players
        .route("/sip-data", get(api::get_sip_data))
        .route("/add-sip", post(api::add_sip))
        // Rules
        .route("/rules", get(api::get_rules))
        .route("/add-rule", post(api::add_rule))
        .route("/delete-rule", post(api::delete_rule))
        // Refresh marker
        .route("/last-refresh", get(api::get_last_refresh))
        .route("/refresh", post(api::refresh))
        .route("/reset-data", post(api::reset_data));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
