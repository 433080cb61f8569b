//! WAV file format parameters.

use bandtable_spec::{BankLayout, SpecError};

use crate::error::SynthResult;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (always 1 for banks).
    pub channels: u16,
    /// Sample rate field; banks store their band length here.
    pub sample_rate: u32,
    /// Bits per sample: 8, 16, 24, or 32.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample,
        }
    }

    /// Format for a bank file under `layout`.
    pub fn for_bank(layout: &BankLayout) -> SynthResult<Self> {
        let sample_rate = u32::try_from(layout.band_len).map_err(|_| {
            SpecError::invalid_layout(format!(
                "band_len {} does not fit a WAV sample rate",
                layout.band_len
            ))
        })?;
        Ok(Self::mono(sample_rate, layout.bits_per_sample))
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// PCM payload size for `num_samples` samples per channel.
    pub fn data_len(&self, num_samples: usize) -> usize {
        num_samples * self.block_align() as usize
    }
}
