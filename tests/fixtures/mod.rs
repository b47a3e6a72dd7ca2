//! Audio test fixtures
//!
//! Programmatically generated audio test data: consistent, reproducible, and
//! free of external file dependencies.
//!
//! Audio format:
//! - Sample rate: 16kHz
//! - Bit depth: 16-bit signed PCM, little-endian
//! - Channels: Mono

use std::f32::consts::PI;

/// Standard sample rate for live-audio tests (16kHz)
pub const SAMPLE_RATE: u32 = 16000;

/// Generate silence (zeros)
pub fn generate_silence(duration_samples: usize) -> Vec<i16> {
    vec![0i16; duration_samples]
}

/// Generate a sine wave tone
pub fn generate_sine_wave(duration_samples: usize, frequency: f32, amplitude: f32) -> Vec<i16> {
    let max_amplitude = amplitude * i16::MAX as f32;
    let angular_freq = 2.0 * PI * frequency / SAMPLE_RATE as f32;

    (0..duration_samples)
        .map(|i| {
            let sample = (angular_freq * i as f32).sin() * max_amplitude;
            sample as i16
        })
        .collect()
}

/// Convert i16 samples to raw little-endian bytes
pub fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}
