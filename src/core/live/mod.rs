//! Realtime live-audio WebSocket client.
//!
//! This module implements the client side of the platform's live-audio
//! protocol: a single WebSocket carrying one JSON control message (the
//! `{"status":"ready"}` handshake) followed by raw binary PCM16 frames in
//! both directions.
//!
//! # Architecture
//!
//! The module follows the split used elsewhere in this crate:
//! - `base` - `LiveSession` trait, connection state, errors, callback types
//! - `messages` - control message and endpoint construction
//! - `client` - the `LiveClient` implementation over tokio-tungstenite
//!
//! # Protocol
//!
//! 1. Dial `{ws_base}/create-web-call?api_key=..&agent_id=..&sample_rate=..`
//!    with one repeated `agent_prompt_params` pair per prompt parameter
//! 2. Wait for a text frame `{"status":"ready"}`; a malformed first frame or
//!    a close before ready fails the setup
//! 3. Stream: outbound PCM16 frames via `send_audio`, inbound frames emitted
//!    through the `on_audio` callback
//!
//! # Example
//!
//! ```rust,ignore
//! use webcall_gateway::core::live::{LiveClient, LiveClientOptions, LiveSession};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = LiveClientOptions {
//!         api_key: "key_...".to_string(),
//!         agent_id: "agent_...".to_string(),
//!         sample_rate: 16000,
//!         agent_prompt_params: vec![],
//!     };
//!
//!     let mut client = LiveClient::new("wss://api.retellai.com", options).unwrap();
//!     client.on_audio(Arc::new(|frame| Box::pin(async move {
//!         // Play frame
//!     })));
//!     client.connect().await.unwrap();
//!
//!     client.send_audio(mic_frame).await.unwrap();
//! }
//! ```

pub mod base;
pub mod client;
pub mod messages;

#[cfg(test)]
mod tests;

pub use base::{
    AudioFrameCallback, CloseCallback, ConnectionState, LiveError, LiveErrorCallback, LiveResult,
    LiveSession,
};
pub use client::{LiveClient, LiveClientOptions};
pub use messages::{ControlMessage, PromptParam};
