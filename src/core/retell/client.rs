//! Retell management API client implementation.
//!
//! # API Reference
//!
//! - Base: `https://api.retellai.com`
//! - Auth: `Authorization: Bearer <API key>` on every request
//! - Content type: JSON both ways
//!
//! Web calls are created against the v2 endpoint; the pre-v2 `/call`
//! registration endpoint is kept because deployed clients still speak it.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::RetellSettings;
use crate::utils::url_validation::validate_http_base;

use super::messages::{
    ApiErrorBody, CreateWebCallRequest, RegisterCallRequest, WebCallResponse,
};

// =============================================================================
// Constants
// =============================================================================

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User-Agent header value for API requests.
const USER_AGENT: &str = concat!("webcall-gateway/", env!("CARGO_PKG_VERSION"));

/// Web-call creation endpoint (v2 API).
const CREATE_WEB_CALL_PATH: &str = "/v2/create-web-call";

/// Legacy call registration endpoint.
const REGISTER_CALL_PATH: &str = "/call";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when talking to the platform API.
#[derive(Debug, Error)]
pub enum RetellError {
    /// The request never produced an HTTP response (DNS, connect, timeout)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The platform answered with a non-success status
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Client-side configuration problem (bad base URL, empty key)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for platform API operations.
pub type RetellResult<T> = Result<T, RetellError>;

// =============================================================================
// Retell Client
// =============================================================================

/// Authenticated client for the Retell management API.
///
/// Cheap to clone; the inner `reqwest::Client` is already reference-counted.
#[derive(Debug, Clone)]
pub struct RetellClient {
    http: Client,
    api_key: String,
    api_base: String,
}

impl RetellClient {
    /// Build a client from validated settings.
    pub fn new(settings: &RetellSettings, timeout: Duration) -> RetellResult<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(RetellError::InvalidConfiguration(
                "API key must not be empty".to_string(),
            ));
        }
        let base = validate_http_base(&settings.api_base)
            .map_err(|e| RetellError::InvalidConfiguration(e.to_string()))?;

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RetellError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            http,
            api_key: settings.api_key.clone(),
            // Trailing slashes would double up when paths are appended
            api_base: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    // =========================================================================
    // Call operations
    // =========================================================================

    /// Create a web call (v2 API). Returns the call id plus the access token
    /// the browser SDK needs to join the audio session.
    pub async fn create_web_call(
        &self,
        request: &CreateWebCallRequest,
    ) -> RetellResult<WebCallResponse> {
        debug!(agent_id = %request.agent_id, "creating web call");
        self.execute(self.request(Method::POST, CREATE_WEB_CALL_PATH).json(request))
            .await
    }

    /// Register a call on the legacy endpoint. Always asks the platform to
    /// stream agent audio from the start, matching the deployed clients.
    pub async fn register_call(&self, agent_id: &str) -> RetellResult<WebCallResponse> {
        debug!(agent_id, "registering call (legacy endpoint)");
        let request = RegisterCallRequest {
            agent_id: agent_id.to_string(),
            stream_out_on_begin: true,
        };
        self.execute(self.request(Method::POST, REGISTER_CALL_PATH).json(&request))
            .await
    }

    /// Create an outbound phone call. The payload is platform-defined and
    /// passed through opaquely.
    pub async fn create_phone_call(&self, options: &Value) -> RetellResult<Value> {
        self.execute(self.request(Method::POST, "/create-phone-call").json(options))
            .await
    }

    /// Fetch a single call by id.
    pub async fn get_call(&self, call_id: &str) -> RetellResult<Value> {
        self.execute(self.request(Method::GET, &format!("/get-call/{call_id}")))
            .await
    }

    /// List calls for the account.
    pub async fn list_calls(&self) -> RetellResult<Value> {
        self.execute(self.request(Method::GET, "/list-calls")).await
    }

    // =========================================================================
    // Agent operations
    // =========================================================================

    pub async fn create_agent(&self, options: &Value) -> RetellResult<Value> {
        self.execute(self.request(Method::POST, "/create-agent").json(options))
            .await
    }

    pub async fn get_agent(&self, agent_id: &str) -> RetellResult<Value> {
        self.execute(self.request(Method::GET, &format!("/get-agent/{agent_id}")))
            .await
    }

    pub async fn list_agents(&self) -> RetellResult<Value> {
        self.execute(self.request(Method::GET, "/list-agents")).await
    }

    pub async fn update_agent(&self, agent_id: &str, patch: &Value) -> RetellResult<Value> {
        self.execute(
            self.request(Method::PATCH, &format!("/update-agent/{agent_id}"))
                .json(patch),
        )
        .await
    }

    pub async fn delete_agent(&self, agent_id: &str) -> RetellResult<()> {
        self.send(self.request(Method::DELETE, &format!("/delete-agent/{agent_id}")))
            .await
            .map(|_| ())
    }

    // =========================================================================
    // Phone number operations
    // =========================================================================

    pub async fn create_phone_number(&self, options: &Value) -> RetellResult<Value> {
        self.execute(self.request(Method::POST, "/create-phone-number").json(options))
            .await
    }

    pub async fn get_phone_number(&self, phone_number: &str) -> RetellResult<Value> {
        self.execute(self.request(Method::GET, &format!("/get-phone-number/{phone_number}")))
            .await
    }

    pub async fn list_phone_numbers(&self) -> RetellResult<Value> {
        self.execute(self.request(Method::GET, "/list-phone-numbers"))
            .await
    }

    /// Reassign the agent behind a phone number.
    pub async fn update_phone_number(
        &self,
        phone_number: &str,
        patch: &Value,
    ) -> RetellResult<Value> {
        self.execute(
            self.request(Method::PATCH, &format!("/update-phone-agent/{phone_number}"))
                .json(patch),
        )
        .await
    }

    pub async fn delete_phone_number(&self, phone_number: &str) -> RetellResult<()> {
        self.send(self.request(Method::DELETE, &format!("/delete-phone-number/{phone_number}")))
            .await
            .map(|_| ())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.api_base, path))
            .bearer_auth(&self.api_key)
    }

    /// Send a request and deserialize the success body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> RetellResult<T> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| RetellError::Http(format!(
            "failed to decode API response: {e}"
        )))
    }

    /// Send a request and return the raw success body.
    ///
    /// Non-2xx statuses become `RetellError::Status` with the most useful
    /// message the error body offers.
    async fn send(&self, request: RequestBuilder) -> RetellResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| RetellError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RetellError::Http(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "platform API returned an error");
            return Err(RetellError::Status {
                status: status.as_u16(),
                body: ApiErrorBody::extract(&body),
            });
        }

        // Deletes come back 204 with nothing to parse
        if status == StatusCode::NO_CONTENT && body.is_empty() {
            return Ok("null".to_string());
        }

        Ok(body)
    }
}
