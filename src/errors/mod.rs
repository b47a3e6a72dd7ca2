//! Application error types
//!
//! - `app_error` - HTTP-facing error type with `IntoResponse` mapping

pub mod app_error;

pub use app_error::{AppError, AppResult};
