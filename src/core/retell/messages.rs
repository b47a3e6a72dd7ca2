//! Request and response types for the Retell management API.
//!
//! The wire format is snake_case JSON. Request payloads are pass-through:
//! `metadata` and `retell_llm_dynamic_variables` are opaque to this crate and
//! serialized only when present. Response types keep unknown fields so that
//! newer API revisions survive a round-trip through the relay.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `POST /v2/create-web-call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWebCallRequest {
    /// Agent to connect the call to
    pub agent_id: String,

    /// Opaque caller-supplied metadata, forwarded verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Dynamic variables substituted into the agent's LLM prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retell_llm_dynamic_variables: Option<Value>,
}

/// Success body from `POST /v2/create-web-call`.
///
/// Only `call_id` is guaranteed; the credential fields have drifted between
/// API revisions (`access_token` on v2, `sample_rate` on the legacy
/// endpoint), so both are optional and everything else is preserved in
/// `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebCallResponse {
    pub call_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_status: Option<String>,

    /// Fields this crate does not model, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Body for the legacy `POST /call` registration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCallRequest {
    pub agent_id: String,

    /// Ask the platform to start streaming agent audio immediately
    pub stream_out_on_begin: bool,
}

/// Reshaped response handed back by the relay's `/register-call` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCallResponse {
    pub call_id: String,
    pub sample_rate: u32,
}

/// Error body shapes the platform has been observed to return.
///
/// Older revisions use `message`, newer ones `error_message`; either may be
/// absent entirely on gateway-level failures.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub error_message: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort extraction of a human-readable message from an error body.
    pub fn extract(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed
                .error_message
                .or(parsed.message)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => body.to_string(),
        }
    }
}
