//! Configuration module for the webcall gateway
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//!
//! # Example
//! ```rust,no_run
//! use webcall_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable base
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::env;
use std::path::PathBuf;

mod yaml;

use crate::utils::url_validation::{validate_http_base, validate_ws_base};

/// Default listen host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

/// Default REST API base for the Retell platform.
pub const DEFAULT_API_BASE: &str = "https://api.retellai.com";

/// Default WebSocket base for the Retell live-audio endpoint.
pub const DEFAULT_WS_BASE: &str = "wss://api.retellai.com";

/// Default audio sample rate handed to clients when the vendor omits one.
const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Default vendor request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoints for the Retell platform
#[derive(Debug, Clone)]
pub struct RetellSettings {
    /// Server-held API key, attached as a bearer credential on every
    /// outbound vendor request. Never exposed to browsers.
    pub api_key: String,
    /// REST API base URL (http/https)
    pub api_base: String,
    /// Live-audio WebSocket base URL (ws/wss)
    pub ws_base: String,
}

/// Server configuration
///
/// Contains all configuration needed to run the gateway:
/// - Server settings (host, port)
/// - Retell platform credentials and endpoints
/// - Audio defaults
/// - Security settings (CORS)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Retell platform settings
    pub retell: RetellSettings,

    /// Sample rate reported to clients when the vendor response omits one
    pub default_sample_rate: u32,

    /// Comma-separated list of allowed CORS origins, or "*" for any.
    /// None means permissive (the relay exists to serve browser demos).
    pub cors_allowed_origins: Option<String>,

    /// Timeout applied to outbound vendor requests
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables only.
    ///
    /// `.env` is loaded in main.rs before this runs, so values from the file
    /// are already visible as environment variables here.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Self::from_env_base()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variables as the base.
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let mut config = Self::from_env_base()?;
        yaml_config.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Get the server address as a string in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the final merged configuration.
    ///
    /// Checks that the API key is present, the listen port is usable, the
    /// sample rate is within the range the platform accepts, and both vendor
    /// base URLs parse with the expected schemes.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.retell.api_key.trim().is_empty() {
            return Err("RETELL_API_KEY is required to start the gateway".into());
        }
        if self.port == 0 {
            return Err("PORT must be non-zero".into());
        }
        if !(8000..=48000).contains(&self.default_sample_rate) {
            return Err(format!(
                "DEFAULT_SAMPLE_RATE must be between 8000 and 48000, got {}",
                self.default_sample_rate
            )
            .into());
        }
        validate_http_base(&self.retell.api_base)?;
        validate_ws_base(&self.retell.ws_base)?;
        Ok(())
    }

    /// Build the configuration from environment variables without validating.
    fn from_env_base() -> Result<Self, Box<dyn std::error::Error>> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_env("PORT", DEFAULT_PORT)?;
        let default_sample_rate = parse_env("DEFAULT_SAMPLE_RATE", DEFAULT_SAMPLE_RATE)?;
        let request_timeout_secs =
            parse_env("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            host,
            port,
            retell: RetellSettings {
                api_key: env::var("RETELL_API_KEY").unwrap_or_default(),
                api_base: env::var("RETELL_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
                ws_base: env::var("RETELL_WS_BASE")
                    .unwrap_or_else(|_| DEFAULT_WS_BASE.to_string()),
            },
            default_sample_rate,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),
            request_timeout_secs,
        })
    }
}

/// Parse an environment variable into `T`, falling back to `default` when unset.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|e| format!("Invalid value for {name}: {e}")),
        Err(_) => Ok(default),
    }
}
