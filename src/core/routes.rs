// HTTP routes configuration

use crate::core::pipeline::RequestPipeline;
use crate::core::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    build_router_with(state, &RequestPipeline::standard())
}

pub fn build_router_with(state: Arc<AppState>, pipeline: &RequestPipeline) -> Router {
    // User endpoints (correlation ID + bearer token)
    let protected = Router::new()
        // The handler reads the ID from the last path segment itself
        .route("/user/", get(crate::handlers::users::get_user_handler))
        .route("/user/{*rest}", get(crate::handlers::users::get_user_handler))
        .route("/users", get(crate::handlers::users::get_users_handler))
        .route("/users/", get(crate::handlers::users::get_users_handler));
    let protected = pipeline.wrap(protected, &state);

    Router::new()
        // Public endpoints
        .route("/health", get(crate::handlers::health::health_handler))
        .merge(protected)
        .with_state(state)
}
