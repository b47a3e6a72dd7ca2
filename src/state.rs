//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::core::retell::{RetellClient, RetellError};

/// State shared across all request handlers.
///
/// Holds the validated configuration and one vendor API client; the client's
/// connection pool is reused across requests.
pub struct AppState {
    pub config: ServerConfig,
    pub retell: RetellClient,
}

impl AppState {
    /// Build the shared state from a validated configuration.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, RetellError> {
        let retell = RetellClient::new(
            &config.retell,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Arc::new(Self { config, retell }))
    }
}
