//! API module
//!
//! Contains HTTP request handlers for user management endpoints and the
//! router that ties them to their paths.

pub mod health;
pub mod middleware;
pub mod users;

use crate::state::SharedStore;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router over the given store
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // User management API
        .route("/usuarios", get(users::list_users).post(users::create_user))
        .route(
            "/usuarios/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(store)
}
