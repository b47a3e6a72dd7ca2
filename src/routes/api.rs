use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::calls;
use crate::state::AppState;
use std::sync::Arc;

/// Create the relay API router
///
/// Note: the CORS layer is applied in main.rs so the whole app (health check
/// included) answers preflight requests.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-web-call", post(calls::create_web_call))
        .route("/register-call", post(calls::register_call))
        .layer(TraceLayer::new_for_http())
}
