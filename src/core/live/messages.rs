//! Control messages and endpoint construction for the live-audio protocol.

use serde::{Deserialize, Serialize};
use url::Url;

use super::base::LiveError;
use crate::utils::url_validation::validate_ws_base;

/// Path of the live-audio endpoint under the WebSocket base.
const LIVE_CALL_PATH: &str = "create-web-call";

/// A single prompt parameter substituted into the agent's prompt template.
///
/// Serialized as JSON into a repeated `agent_prompt_params` query pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptParam {
    pub name: String,
    pub value: String,
}

/// The one JSON control message the server sends before switching to binary
/// audio frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlMessage {
    pub status: String,
}

impl ControlMessage {
    /// True when this is the ready handshake signal.
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

/// Build the dialable live-audio endpoint from the WebSocket base and call
/// parameters.
pub fn build_endpoint(
    ws_base: &str,
    api_key: &str,
    agent_id: &str,
    sample_rate: u32,
    agent_prompt_params: &[PromptParam],
) -> Result<Url, LiveError> {
    let base = validate_ws_base(ws_base).map_err(|e| LiveError::InvalidEndpoint(e.to_string()))?;

    let mut url = base
        .join(LIVE_CALL_PATH)
        .map_err(|e| LiveError::InvalidEndpoint(e.to_string()))?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("api_key", api_key);
        pairs.append_pair("agent_id", agent_id);
        pairs.append_pair("sample_rate", &sample_rate.to_string());
        for param in agent_prompt_params {
            let encoded = serde_json::to_string(param)
                .map_err(|e| LiveError::InvalidEndpoint(e.to_string()))?;
            pairs.append_pair("agent_prompt_params", &encoded);
        }
    }

    Ok(url)
}
