//! Audio sample format conversion.
//!
//! The live-audio protocol carries raw PCM 16-bit signed little-endian
//! frames; playback and capture pipelines work in normalized f32. This
//! module holds the conversion between the two.

pub mod pcm;

pub use pcm::{f32_to_pcm16, pcm16_to_f32};
