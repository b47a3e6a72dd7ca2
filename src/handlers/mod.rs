//! HTTP request handlers
//!
//! This module organizes the relay's handlers into logical groups:
//! - `api` - Health check endpoint
//! - `calls` - Call registration relay endpoints

pub mod api;
pub mod calls;

// Re-export commonly used handlers for convenient access
pub use calls::{create_web_call, register_call};
