use axum::response::Json;
use serde_json::{Value, json};

/// Health check endpoint.
///
/// Returns service status and version, with no auth and no upstream call.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "webcall-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
