//! PCM conversion, extraction, and hashing.

use bandtable_spec::SpecError;

use crate::error::SynthResult;

/// Full-scale value for signed `bits`-wide PCM.
pub(crate) fn full_scale(bits: u16) -> f64 {
    ((1i64 << (bits - 1)) - 1) as f64
}

/// Converts f64 samples to little-endian integer PCM.
///
/// Samples are clipped to `[-1.0, 1.0]` and scaled to full scale. 8-bit
/// output is unsigned with a midpoint of 128, as RIFF requires.
pub fn samples_to_pcm(samples: &[f64], bits_per_sample: u16) -> SynthResult<Vec<u8>> {
    let width = match bits_per_sample {
        8 | 16 | 24 | 32 => bits_per_sample as usize / 8,
        other => return Err(SpecError::UnsupportedBitDepth(other).into()),
    };
    let scale = full_scale(bits_per_sample);
    let mut pcm = Vec::with_capacity(samples.len() * width);

    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * scale).round() as i32;
        match bits_per_sample {
            8 => pcm.push((value + 128) as u8),
            16 => pcm.extend_from_slice(&(value as i16).to_le_bytes()),
            24 => pcm.extend_from_slice(&value.to_le_bytes()[..3]),
            _ => pcm.extend_from_slice(&value.to_le_bytes()),
        }
    }

    Ok(pcm)
}

/// Extracts the `data` chunk payload from a WAV file buffer.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            return wav_data.get(data_start..data_start.checked_add(chunk_size)?);
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// BLAKE3 hash of a PCM payload, as lowercase hex.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a complete WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
