//! Relay endpoint integration tests.
//!
//! The vendor API is mocked with wiremock and requests are driven through the
//! assembled router with `tower::ServiceExt::oneshot`, so these cover the
//! full handler -> client -> HTTP path without a network.

use std::sync::Arc;

use axum::{Router, body::Body, routing::get};
use http::{
    Method, Request, StatusCode,
    header::{CONTENT_TYPE, ORIGIN},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use webcall_gateway::config::{RetellSettings, ServerConfig};
use webcall_gateway::state::AppState;
use webcall_gateway::{handlers, routes};

const TEST_API_KEY: &str = "key_test_1a2b3c";

/// Assemble the app the way main.rs does, pointed at a mock vendor base.
fn test_app(api_base: &str) -> Router {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        retell: RetellSettings {
            api_key: TEST_API_KEY.to_string(),
            api_base: api_base.to_string(),
            ws_base: "wss://api.retellai.com".to_string(),
        },
        default_sample_rate: 16000,
        cors_allowed_origins: None,
        request_timeout_secs: 5,
    };
    let state = AppState::new(config).expect("state should build");

    Router::new()
        .route("/", get(handlers::api::health_check))
        .merge(routes::api::create_api_router())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn body_value(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_web_call_forwards_agent_id_unchanged() {
    let server = MockServer::start().await;

    // Exact body match: agent_id byte-for-byte, no extra fields injected
    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(body_json(json!({ "agent_id": "agent_oBeDLoLOeuAbiuaMFXRtDOLriT" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "call_id": "call_4f8a",
            "access_token": "tok_9b1c",
            "call_status": "registered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let response = app
        .oneshot(post_json(
            "/create-web-call",
            json!({ "agent_id": "agent_oBeDLoLOeuAbiuaMFXRtDOLriT" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_value(response).await;
    assert_eq!(body["call_id"], "call_4f8a");
    assert_eq!(body["access_token"], "tok_9b1c");
    // Pass-through keeps fields this crate does not model
    assert_eq!(body["call_status"], "registered");
}

#[tokio::test]
async fn create_web_call_forwards_optional_fields_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .and(body_json(json!({
            "agent_id": "agent_123",
            "metadata": { "user": "u-7" },
            "retell_llm_dynamic_variables": { "customer_name": "Ada" }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "call_id": "call_1", "access_token": "tok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let response = app
        .oneshot(post_json(
            "/create-web-call",
            json!({
                "agent_id": "agent_123",
                "metadata": { "user": "u-7" },
                "retell_llm_dynamic_variables": { "customer_name": "Ada" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn vendor_error_status_collapses_to_500_with_error_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/create-web-call"))
        .respond_with(
            ResponseTemplate::new(402)
                .set_body_json(json!({ "error_message": "payment required" })),
        )
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let response = app
        .oneshot(post_json("/create-web-call", json!({ "agent_id": "agent_123" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_value(response).await;
    let message = body["error"].as_str().expect("error field present");
    assert!(message.contains("payment required"));
}

#[tokio::test]
async fn unreachable_vendor_collapses_to_500_with_error_field() {
    // Nothing is listening here
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(post_json("/create-web-call", json!({ "agent_id": "agent_123" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_value(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn empty_agent_id_is_rejected_without_an_upstream_call() {
    let server = MockServer::start().await;
    // No mock mounted: an upstream call would 404 and fail the test via 500 body

    let app = test_app(&server.uri());
    let response = app
        .oneshot(post_json("/create-web-call", json!({ "agent_id": "  " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn register_call_reshapes_legacy_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/call"))
        .and(body_json(json!({
            "agent_id": "agent_123",
            "stream_out_on_begin": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "call_id": "call_legacy",
            "sample_rate": 24000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let response = app
        .oneshot(post_json("/register-call", json!({ "agent_id": "agent_123" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body, json!({ "call_id": "call_legacy", "sample_rate": 24000 }));
}

#[tokio::test]
async fn register_call_defaults_sample_rate_when_vendor_omits_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/call"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "call_id": "call_legacy" })),
        )
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let response = app
        .oneshot(post_json("/register-call", json!({ "agent_id": "agent_123" })))
        .await
        .unwrap();

    let body = body_value(response).await;
    assert_eq!(body["sample_rate"], 16000);
}

#[tokio::test]
async fn preflight_is_always_answered() {
    let server = MockServer::start().await;
    let app = test_app(&server.uri());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/create-web-call")
        .header(ORIGIN, "https://demo.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn health_check_is_public() {
    let server = MockServer::start().await;
    let app = test_app(&server.uri());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body["status"], "ok");
}
