//! Router assembly: common and recipe routes plus the HTTP middleware stack.

mod common;
mod recipe;

pub use common::common_routes;
pub use recipe::recipe_routes;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Full application router. `body_limit` caps request bodies in bytes; it replaces
/// axum's 2 MB default, and oversized bodies are rejected by the JSON extractor.
pub fn app(state: AppState, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(recipe_routes(state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}
