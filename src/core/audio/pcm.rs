//! PCM 16-bit <-> f32 sample conversion.
//!
//! Samples are 16-bit signed little-endian on the wire and normalized
//! `[-1.0, 1.0]` floats in memory. One scale factor, 2^15, is used in both
//! directions; encode clamps out-of-range input so that +1.0 maps to
//! `i16::MAX` instead of wrapping.

/// Scale factor between normalized float samples and PCM 16-bit integers.
const PCM_SCALE: f32 = 32768.0;

/// Decode PCM 16-bit little-endian bytes into normalized f32 samples.
///
/// A trailing odd byte is ignored.
pub fn pcm16_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / PCM_SCALE)
        .collect()
}

/// Encode normalized f32 samples into PCM 16-bit little-endian bytes.
///
/// Input outside `[-1.0, 1.0]` is clamped to the representable range.
pub fn f32_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let scaled = (sample * PCM_SCALE).clamp(i16::MIN as f32, i16::MAX as f32);
        bytes.extend_from_slice(&(scaled as i16).to_le_bytes());
    }
    bytes
}
