//! Base trait and types for the live-audio session.

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur during a live-audio session.
#[derive(Debug, Error)]
pub enum LiveError {
    /// The WebSocket connection could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The configured endpoint could not be turned into a dialable URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The first control frame was not parseable JSON
    #[error("Malformed ready event: {0}")]
    MalformedReady(String),

    /// The socket closed or errored before the ready handshake completed
    #[error("WebSocket closed before ready")]
    ClosedBeforeReady,

    /// Transport-level WebSocket failure after setup
    #[error("WebSocket error: {0}")]
    WebSocket(String),
}

/// Result type for live-audio operations.
pub type LiveResult<T> = Result<T, LiveError>;

// =============================================================================
// Connection State
// =============================================================================

/// Lifecycle of a live-audio session.
///
/// Transitions are strictly forward: `Connecting -> AwaitingReady ->
/// Streaming -> Closed`, with any failure jumping straight to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Constructed, socket not yet dialed
    #[default]
    Connecting,
    /// Socket open, waiting for the ready control message
    AwaitingReady,
    /// Handshake complete, audio flowing
    Streaming,
    /// Session over, by either side
    Closed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Connecting => write!(f, "Connecting"),
            ConnectionState::AwaitingReady => write!(f, "AwaitingReady"),
            ConnectionState::Streaming => write!(f, "Streaming"),
            ConnectionState::Closed => write!(f, "Closed"),
        }
    }
}

// =============================================================================
// Callback Types
// =============================================================================

/// Callback type for inbound audio frames.
pub type AudioFrameCallback =
    Arc<dyn Fn(Bytes) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Callback type for session close events.
pub type CloseCallback =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Callback type for error events.
pub type LiveErrorCallback =
    Arc<dyn Fn(LiveError) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

// =============================================================================
// Base Trait
// =============================================================================

/// Trait for a live bidirectional audio session.
///
/// Audio is raw PCM 16-bit signed little-endian at the sample rate negotiated
/// when the session was created.
#[async_trait]
pub trait LiveSession: Send + Sync {
    /// Dial the socket and complete the ready handshake.
    ///
    /// No timeout is enforced on the handshake wait; callers that need one
    /// can wrap this in `tokio::time::timeout`. Dropping the future closes
    /// the socket.
    async fn connect(&mut self) -> LiveResult<()>;

    /// Send one outbound audio frame.
    ///
    /// A silent no-op when the socket is not open: no error, no queueing.
    async fn send_audio(&self, frame: Bytes) -> LiveResult<()>;

    /// Close the session. Idempotent.
    async fn close(&mut self);

    /// Current session state.
    async fn state(&self) -> ConnectionState;

    /// Register the inbound-audio callback.
    ///
    /// Frames are only ever emitted after the ready handshake has completed.
    fn on_audio(&mut self, callback: AudioFrameCallback);

    /// Register the close callback.
    fn on_close(&mut self, callback: CloseCallback);

    /// Register the error callback.
    fn on_error(&mut self, callback: LiveErrorCallback);
}
