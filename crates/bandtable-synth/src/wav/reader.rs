//! Reading banks back through `hound`.

use std::io::Read;
use std::path::Path;

use bandtable_spec::{BankLayout, DEFAULT_GAIN, MAX_NUM_BANDS, SUPPORTED_BIT_DEPTHS};
use hound::{SampleFormat, WavReader};

use crate::bank::WavetableBank;
use crate::error::{SynthError, SynthResult};

use super::pcm::full_scale;

/// Reads the bank file at `path`.
///
/// The layout is implied by the file: the sample rate is the band length and
/// the frame count is a whole number of bands. Samples are normalized back
/// to `[-1, 1]`; the gain they were written with is not recorded, so the
/// layout reports the default gain.
pub fn read_bank(path: impl AsRef<Path>) -> SynthResult<WavetableBank> {
    read_bank_from(WavReader::open(path)?)
}

/// Reads a bank from an open `hound` reader.
pub fn read_bank_from<R: Read>(reader: WavReader<R>) -> SynthResult<WavetableBank> {
    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(SynthError::invalid_bank(format!(
            "expected 1 channel, found {}",
            spec.channels
        )));
    }
    if spec.sample_format != SampleFormat::Int
        || !SUPPORTED_BIT_DEPTHS.contains(&spec.bits_per_sample)
    {
        return Err(SynthError::invalid_bank(format!(
            "unsupported sample format: {:?} {}-bit",
            spec.sample_format, spec.bits_per_sample
        )));
    }

    let band_len = spec.sample_rate as usize;
    let frames = reader.len() as usize;
    if band_len == 0 || frames == 0 || !frames.is_multiple_of(band_len) {
        return Err(SynthError::invalid_bank(format!(
            "{} frames is not a whole number of {}-sample bands",
            frames, band_len
        )));
    }

    let num_bands = frames / band_len;
    if num_bands > MAX_NUM_BANDS {
        return Err(SynthError::invalid_bank(format!(
            "{} frames make {} bands of {} samples, more than {}",
            frames, num_bands, band_len, MAX_NUM_BANDS
        )));
    }

    let scale = full_scale(spec.bits_per_sample);
    let samples = reader
        .into_samples::<i32>()
        .map(|s| s.map(|v| v as f64 / scale))
        .collect::<Result<Vec<_>, _>>()?;

    let layout = BankLayout {
        num_bands,
        band_len,
        gain: DEFAULT_GAIN,
        bits_per_sample: spec.bits_per_sample,
    };
    WavetableBank::from_parts(layout, samples)
}
