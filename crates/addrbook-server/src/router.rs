//! Router assembly for the address book HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/get_all_address",
            get(handlers::addresses::get_all_address),
        )
        .route("/add_address", post(handlers::addresses::add_address))
        .route(
            "/update_address",
            put(handlers::addresses::update_address),
        )
        .route(
            "/delete_address",
            delete(handlers::addresses::delete_address),
        )
        .route(
            "/get_address_within_range",
            get(handlers::addresses::get_address_within_range),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
