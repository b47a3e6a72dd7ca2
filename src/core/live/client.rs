//! Live-audio WebSocket client implementation.
//!
//! # Protocol
//!
//! - Endpoint: `{ws_base}/create-web-call?api_key=..&agent_id=..&sample_rate=..`
//!   (plus one repeated `agent_prompt_params` pair per prompt parameter)
//! - Handshake: the server sends `{"status":"ready"}` as a text frame once the
//!   agent side of the call is up
//! - Audio: raw PCM 16-bit little-endian binary frames, both directions
//!
//! # Thread Safety
//!
//! Mutable state is held behind `Arc` wrappers so it can be shared with the
//! spawned reader and writer tasks. The `open` flag is an `Arc<AtomicBool>`
//! for lock-free checks on the send path.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, RwLock, mpsc};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, trace, warn};
use url::Url;

use super::base::{
    AudioFrameCallback, CloseCallback, ConnectionState, LiveError, LiveErrorCallback, LiveResult,
    LiveSession,
};
use super::messages::{ControlMessage, PromptParam, build_endpoint};

/// Channel capacity for outbound WebSocket frames.
const WS_CHANNEL_CAPACITY: usize = 256;

/// Parameters identifying the call to set up.
#[derive(Debug, Clone)]
pub struct LiveClientOptions {
    /// Platform API key, passed as a query parameter by this protocol
    pub api_key: String,
    /// Agent to connect the call to
    pub agent_id: String,
    /// Audio sample rate for both directions
    pub sample_rate: u32,
    /// Prompt parameters substituted into the agent's prompt template
    pub agent_prompt_params: Vec<PromptParam>,
}

// =============================================================================
// Live Client
// =============================================================================

/// WebSocket client for a single live-audio call.
///
/// One client is one call: after `close()` (or a server-side close) the
/// client stays in `Closed` and a new call needs a new client.
pub struct LiveClient {
    /// Fully-built endpoint, fixed at construction
    endpoint: Url,
    /// Session state, shared with the reader task
    state: Arc<RwLock<ConnectionState>>,
    /// Fast open/closed flag for the send path
    open: Arc<AtomicBool>,
    /// Outbound frame channel, present only while streaming
    ws_sender: Option<mpsc::Sender<Message>>,

    /// Callbacks
    audio_callback: Arc<Mutex<Option<AudioFrameCallback>>>,
    close_callback: Arc<Mutex<Option<CloseCallback>>>,
    error_callback: Arc<Mutex<Option<LiveErrorCallback>>>,

    /// Task handles, aborted on drop
    reader_handle: Option<JoinHandle<()>>,
    writer_handle: Option<JoinHandle<()>>,
}

impl LiveClient {
    /// Build a client for one call. Validates and fixes the endpoint but does
    /// not dial; call `connect` to establish the session.
    pub fn new(ws_base: &str, options: LiveClientOptions) -> LiveResult<Self> {
        let endpoint = build_endpoint(
            ws_base,
            &options.api_key,
            &options.agent_id,
            options.sample_rate,
            &options.agent_prompt_params,
        )?;

        Ok(Self {
            endpoint,
            state: Arc::new(RwLock::new(ConnectionState::Connecting)),
            open: Arc::new(AtomicBool::new(false)),
            ws_sender: None,
            audio_callback: Arc::new(Mutex::new(None)),
            close_callback: Arc::new(Mutex::new(None)),
            error_callback: Arc::new(Mutex::new(None)),
            reader_handle: None,
            writer_handle: None,
        })
    }

    /// The endpoint this client will dial.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fail(&self, error: LiveError) -> LiveError {
        *self.state.write().await = ConnectionState::Closed;
        error
    }

    fn set_callback<T>(slot: &Arc<Mutex<Option<T>>>, callback: T)
    where
        T: Send + 'static,
    {
        if let Ok(mut guard) = slot.try_lock() {
            *guard = Some(callback);
        } else {
            let slot = slot.clone();
            tokio::spawn(async move {
                *slot.lock().await = Some(callback);
            });
        }
    }
}

#[async_trait]
impl LiveSession for LiveClient {
    async fn connect(&mut self) -> LiveResult<()> {
        // Already streaming: nothing to do
        if self.open.load(Ordering::SeqCst) {
            return Ok(());
        }

        debug!(endpoint = %self.endpoint, "dialing live-audio endpoint");
        let (ws_stream, _) = match connect_async(self.endpoint.as_str()).await {
            Ok(connected) => connected,
            Err(e) => return Err(self.fail(LiveError::ConnectionFailed(e.to_string())).await),
        };

        *self.state.write().await = ConnectionState::AwaitingReady;
        let (mut write, mut read) = ws_stream.split();

        // Handshake: consume frames until the ready control message. Binary
        // frames received here are discarded, never surfaced as audio.
        loop {
            match read.next().await {
                Some(Ok(Message::Text(text))) => {
                    let control: ControlMessage = match serde_json::from_str(text.as_str()) {
                        Ok(control) => control,
                        Err(e) => {
                            return Err(self.fail(LiveError::MalformedReady(e.to_string())).await);
                        }
                    };
                    if control.is_ready() {
                        break;
                    }
                    trace!(status = %control.status, "non-ready control message during setup");
                }
                Some(Ok(Message::Binary(_))) => {
                    trace!("discarding binary frame before ready");
                }
                Some(Ok(Message::Close(_))) | None => {
                    return Err(self.fail(LiveError::ClosedBeforeReady).await);
                }
                Some(Ok(_)) => {} // ping/pong
                Some(Err(e)) => {
                    return Err(self.fail(LiveError::ConnectionFailed(e.to_string())).await);
                }
            }
        }

        *self.state.write().await = ConnectionState::Streaming;
        self.open.store(true, Ordering::SeqCst);

        // Writer task: drains the outbound channel into the socket
        let (tx, mut rx) = mpsc::channel::<Message>(WS_CHANNEL_CAPACITY);
        self.ws_sender = Some(tx);
        self.writer_handle = Some(tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                let closing = matches!(message, Message::Close(_));
                if write.send(message).await.is_err() {
                    break;
                }
                if closing {
                    break;
                }
            }
        }));

        // Reader task: emits inbound audio and the final close/error events
        let state = self.state.clone();
        let open = self.open.clone();
        let audio_callback = self.audio_callback.clone();
        let close_callback = self.close_callback.clone();
        let error_callback = self.error_callback.clone();
        self.reader_handle = Some(tokio::spawn(async move {
            while let Some(message) = read.next().await {
                match message {
                    Ok(Message::Binary(frame)) => {
                        if let Some(cb) = audio_callback.lock().await.as_ref() {
                            cb(frame).await;
                        }
                    }
                    Ok(Message::Text(text)) => {
                        trace!(text = %text.as_str(), "ignoring control frame while streaming");
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {} // ping/pong
                    Err(e) => {
                        warn!(error = %e, "live socket failed");
                        if let Some(cb) = error_callback.lock().await.as_ref() {
                            cb(LiveError::WebSocket(e.to_string())).await;
                        }
                        break;
                    }
                }
            }

            open.store(false, Ordering::SeqCst);
            *state.write().await = ConnectionState::Closed;
            if let Some(cb) = close_callback.lock().await.as_ref() {
                cb().await;
            }
        }));

        Ok(())
    }

    async fn send_audio(&self, frame: Bytes) -> LiveResult<()> {
        // Silent drop when the socket is not open: no error, no queueing
        if !self.open.load(Ordering::SeqCst) {
            return Ok(());
        }

        if let Some(sender) = &self.ws_sender
            && sender.try_send(Message::Binary(frame)).is_err()
        {
            trace!("dropping outbound frame: channel full or socket gone");
        }

        Ok(())
    }

    async fn close(&mut self) {
        if let Some(sender) = self.ws_sender.take() {
            let _ = sender.try_send(Message::Close(None));
        }
        self.open.store(false, Ordering::SeqCst);
        *self.state.write().await = ConnectionState::Closed;
    }

    async fn state(&self) -> ConnectionState {
        *self.state.read().await
    }

    fn on_audio(&mut self, callback: AudioFrameCallback) {
        Self::set_callback(&self.audio_callback, callback);
    }

    fn on_close(&mut self, callback: CloseCallback) {
        Self::set_callback(&self.close_callback, callback);
    }

    fn on_error(&mut self, callback: LiveErrorCallback) {
        Self::set_callback(&self.error_callback, callback);
    }
}

impl Drop for LiveClient {
    fn drop(&mut self) {
        // Aborting the writer drops the sink half, which closes the socket
        if let Some(handle) = self.writer_handle.take() {
            handle.abort();
        }
        if let Some(handle) = self.reader_handle.take() {
            handle.abort();
        }
    }
}
