//! Call registration relay endpoints.
//!
//! Browsers cannot hold the platform API key, so they POST here and the
//! relay attaches the server-held key before forwarding. The relay adds
//! nothing else: bodies pass through unchanged, and every upstream failure
//! collapses to a 500 with an `error` field (see `AppError`).

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::core::retell::{CreateWebCallRequest, RegisterCallResponse, WebCallResponse};
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;

/// Body accepted by the legacy `/register-call` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCallBody {
    pub agent_id: String,
}

/// `POST /create-web-call`
///
/// Forwards `agent_id` unchanged, plus `metadata` and
/// `retell_llm_dynamic_variables` only when the caller supplied them. On
/// success the vendor body is passed through with status 201.
pub async fn create_web_call(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateWebCallRequest>,
) -> AppResult<(StatusCode, Json<WebCallResponse>)> {
    if request.agent_id.trim().is_empty() {
        return Err(AppError::BadRequest("agent_id must not be empty".to_string()));
    }

    let response = state.retell.create_web_call(&request).await?;
    info!(call_id = %response.call_id, agent_id = %request.agent_id, "web call created");

    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /register-call`
///
/// Legacy registration route kept for clients built against the pre-v2 API.
/// Reshapes the vendor response to `{call_id, sample_rate}`, substituting the
/// configured default when the vendor omits the sample rate.
pub async fn register_call(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterCallBody>,
) -> AppResult<Json<RegisterCallResponse>> {
    if body.agent_id.trim().is_empty() {
        return Err(AppError::BadRequest("agent_id must not be empty".to_string()));
    }

    let registered = state.retell.register_call(&body.agent_id).await?;
    info!(call_id = %registered.call_id, agent_id = %body.agent_id, "call registered");

    Ok(Json(RegisterCallResponse {
        call_id: registered.call_id,
        sample_rate: registered
            .sample_rate
            .unwrap_or(state.config.default_sample_rate),
    }))
}
