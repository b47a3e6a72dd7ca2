//! Unit tests for the live-audio client.
//!
//! Tests that need a real socket run against a local mock WebSocket server in
//! tests/live_client_tests.rs; these cover endpoint construction, control
//! message parsing, and offline state behavior.

use bytes::Bytes;

use super::base::{ConnectionState, LiveError, LiveSession};
use super::client::{LiveClient, LiveClientOptions};
use super::messages::{ControlMessage, PromptParam, build_endpoint};

fn options() -> LiveClientOptions {
    LiveClientOptions {
        api_key: "key_1a2b".to_string(),
        agent_id: "agent_123".to_string(),
        sample_rate: 16000,
        agent_prompt_params: vec![],
    }
}

// =============================================================================
// Endpoint Construction Tests
// =============================================================================

mod endpoint_tests {
    use super::*;

    #[test]
    fn test_basic_endpoint() {
        let url = build_endpoint("wss://api.retellai.com", "key_1a2b", "agent_123", 16000, &[])
            .unwrap();
        assert_eq!(url.scheme(), "wss");
        assert_eq!(url.path(), "/create-web-call");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("api_key".to_string(), "key_1a2b".to_string())));
        assert!(pairs.contains(&("agent_id".to_string(), "agent_123".to_string())));
        assert!(pairs.contains(&("sample_rate".to_string(), "16000".to_string())));
    }

    #[test]
    fn test_prompt_params_repeated_as_json() {
        let params = vec![
            PromptParam {
                name: "customer_name".to_string(),
                value: "Ada".to_string(),
            },
            PromptParam {
                name: "plan".to_string(),
                value: "pro".to_string(),
            },
        ];
        let url =
            build_endpoint("wss://api.retellai.com", "k", "a", 24000, &params).unwrap();

        let encoded: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "agent_prompt_params")
            .map(|(_, v)| v.to_string())
            .collect();
        assert_eq!(encoded.len(), 2);

        let first: PromptParam = serde_json::from_str(&encoded[0]).unwrap();
        assert_eq!(first, params[0]);
        let second: PromptParam = serde_json::from_str(&encoded[1]).unwrap();
        assert_eq!(second, params[1]);
    }

    #[test]
    fn test_http_base_rejected() {
        let result = build_endpoint("https://api.retellai.com", "k", "a", 16000, &[]);
        assert!(matches!(result, Err(LiveError::InvalidEndpoint(_))));
    }
}

// =============================================================================
// Control Message Tests
// =============================================================================

mod control_tests {
    use super::*;

    #[test]
    fn test_ready_message_parses() {
        let control: ControlMessage = serde_json::from_str(r#"{"status":"ready"}"#).unwrap();
        assert!(control.is_ready());
    }

    #[test]
    fn test_non_ready_status() {
        let control: ControlMessage = serde_json::from_str(r#"{"status":"queued"}"#).unwrap();
        assert!(!control.is_ready());
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(serde_json::from_str::<ControlMessage>("{status ready}").is_err());
    }
}

// =============================================================================
// Offline State Tests
// =============================================================================

mod state_tests {
    use super::*;

    #[tokio::test]
    async fn test_new_client_starts_connecting() {
        let client = LiveClient::new("wss://api.retellai.com", options()).unwrap();
        assert_eq!(client.state().await, ConnectionState::Connecting);
    }

    #[tokio::test]
    async fn test_send_before_connect_is_silent_noop() {
        let client = LiveClient::new("wss://api.retellai.com", options()).unwrap();
        let result = client.send_audio(Bytes::from_static(&[0u8; 320])).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let mut client = LiveClient::new("wss://api.retellai.com", options()).unwrap();
        client.close().await;
        assert_eq!(client.state().await, ConnectionState::Closed);
        client.close().await;
        assert_eq!(client.state().await, ConnectionState::Closed);

        // Sends after close stay silent no-ops
        assert!(client.send_audio(Bytes::from_static(&[0u8; 4])).await.is_ok());
    }

    #[test]
    fn test_bad_base_rejected_at_construction() {
        assert!(LiveClient::new("ftp://api.retellai.com", options()).is_err());
    }
}
