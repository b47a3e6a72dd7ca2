use serde::Deserialize;
use std::path::PathBuf;

use super::ServerConfig;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration; anything left out
/// keeps the value already loaded from the environment.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 8080
///
/// retell:
///   api_key: "your-retell-key"
///   api_base: "https://api.retellai.com"
///   ws_base: "wss://api.retellai.com"
///
/// audio:
///   default_sample_rate: 16000
///
/// security:
///   cors_allowed_origins: "https://demo.example.com,https://app.example.com"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct YamlConfig {
    pub server: Option<ServerSection>,
    pub retell: Option<RetellSection>,
    pub audio: Option<AudioSection>,
    pub security: Option<SecuritySection>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RetellSection {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub ws_base: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AudioSection {
    pub default_sample_rate: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SecuritySection {
    pub cors_allowed_origins: Option<String>,
}

impl YamlConfig {
    /// Load and parse a YAML configuration file.
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_str(&contents)
    }

    /// Parse YAML configuration from a string.
    pub fn from_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: YamlConfig = serde_yaml::from_str(contents)
            .map_err(|e| format!("Failed to parse YAML config: {}", e))?;
        Ok(config)
    }

    /// Overlay every value present in the YAML onto `config`.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                config.host = host.clone();
            }
            if let Some(port) = server.port {
                config.port = port;
            }
            if let Some(timeout) = server.request_timeout_secs {
                config.request_timeout_secs = timeout;
            }
        }
        if let Some(retell) = &self.retell {
            if let Some(api_key) = &retell.api_key {
                config.retell.api_key = api_key.clone();
            }
            if let Some(api_base) = &retell.api_base {
                config.retell.api_base = api_base.clone();
            }
            if let Some(ws_base) = &retell.ws_base {
                config.retell.ws_base = ws_base.clone();
            }
        }
        if let Some(audio) = &self.audio {
            if let Some(rate) = audio.default_sample_rate {
                config.default_sample_rate = rate;
            }
        }
        if let Some(security) = &self.security {
            if let Some(origins) = &security.cors_allowed_origins {
                config.cors_allowed_origins = Some(origins.clone());
            }
        }
    }
}
