// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{hello_handler, httpbin_headers_handler};
use crate::state::AppState;

pub const HELLO: &str = "/";
pub const HTTPBIN_HEADERS: &str = "/httpbin/headers";

/// Build the axum router with both endpoints.
///
/// Anything outside the two routes falls through to axum's default 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HELLO, get(hello_handler))
        .route(HTTPBIN_HEADERS, get(httpbin_headers_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
