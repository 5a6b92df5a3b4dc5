//! Conversion of inline audio parts into playable `data:` URIs.
//!
//! Speech models answer with raw 16-bit little-endian PCM
//! (`audio/L16;codec=pcm;rate=24000`), which browsers cannot play directly.
//! PCM payloads are wrapped in a WAV container; any other MIME type is
//! passed through as-is.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::GenAiError;

const DEFAULT_SAMPLE_RATE: u32 = 24_000;
const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Build a `data:` URI from an inline audio part.
pub fn to_data_uri(mime_type: &str, data: &str) -> Result<String, GenAiError> {
    if !is_pcm(mime_type) {
        return Ok(format!("data:{mime_type};base64,{data}"));
    }

    let pcm = STANDARD
        .decode(data)
        .map_err(|e| GenAiError::Audio(e.to_string()))?;
    let wav = wrap_wav(&pcm, sample_rate(mime_type));
    Ok(format!("data:audio/wav;base64,{}", STANDARD.encode(wav)))
}

fn is_pcm(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("audio/L16") || essence.eq_ignore_ascii_case("audio/pcm")
}

fn sample_rate(mime_type: &str) -> u32 {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rate="))
        .find_map(|rate| rate.parse().ok())
        .unwrap_or(DEFAULT_SAMPLE_RATE)
}

/// Prefix PCM samples with a 44-byte RIFF/WAVE header.
fn wrap_wav(pcm: &[u8], sample_rate: u32) -> Vec<u8> {
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_len = pcm.len() as u32;

    let mut out = Vec::with_capacity(44 + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);
    out
}
