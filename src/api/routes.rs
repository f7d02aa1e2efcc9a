//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{home, AppState};

/// Create the API router.
///
/// `/` is the only route. Other paths get axum's default 404 and other
/// methods on `/` its default 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
