//! Retell platform REST client.
//!
//! Authenticated client for the voice-agent platform's management API. Call
//! registration is the hot path (the relay handlers sit directly on top of
//! it); agent and phone-number management round out the surface.
//!
//! # Architecture
//!
//! All operations are plain JSON-over-HTTPS with a bearer API key:
//!
//! 1. Build the request against the configured base URL
//! 2. Send with a bounded timeout
//! 3. Map transport failures and non-2xx statuses to `RetellError`
//! 4. Deserialize the success body
//!
//! Response types tolerate field drift across API revisions: unknown fields
//! are preserved so the relay can pass vendor bodies through unmodified.

pub mod client;
pub mod messages;


pub use client::{RetellClient, RetellError, RetellResult};
pub use messages::{
    CreateWebCallRequest, RegisterCallRequest, RegisterCallResponse, WebCallResponse,
};
