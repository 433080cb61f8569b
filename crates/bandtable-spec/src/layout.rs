//! Bank layout: band count, band length, output gain, and bit depth.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Default number of bands per bank (harmonic limits 1, 2, 4, ..., 128).
pub const DEFAULT_NUM_BANDS: usize = 8;

/// Largest accepted band count.
pub const MAX_NUM_BANDS: usize = 16;

/// Default output gain applied to every summed sample.
pub const DEFAULT_GAIN: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Default PCM bit depth.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// PCM widths the writer supports.
pub const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

/// Returns the default band length for `num_bands` bands.
///
/// The top band gets four samples per cycle of its highest harmonic. Counts
/// outside `1..=MAX_NUM_BANDS` are clamped here and rejected by
/// [`BankLayout::validate`].
pub fn default_band_len(num_bands: usize) -> usize {
    4 << (num_bands.clamp(1, MAX_NUM_BANDS) - 1)
}

/// Largest PCM payload a RIFF file can describe (`u32::MAX` minus the header).
pub const MAX_PCM_BYTES: usize = u32::MAX as usize - 36;

/// Layout shared by every band of a bank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankLayout {
    /// Number of bands.
    pub num_bands: usize,
    /// Samples per band. Also written as the file's sample rate.
    pub band_len: usize,
    /// Normalization gain.
    pub gain: f64,
    /// PCM bit depth of the written file.
    pub bits_per_sample: u16,
}

impl Default for BankLayout {
    fn default() -> Self {
        Self::with_bands(DEFAULT_NUM_BANDS)
    }
}

impl BankLayout {
    /// Creates a layout with `num_bands` bands and the derived default length.
    pub fn with_bands(num_bands: usize) -> Self {
        Self {
            num_bands,
            band_len: default_band_len(num_bands),
            gain: DEFAULT_GAIN,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }

    /// Sets the band length.
    pub fn band_len(mut self, band_len: usize) -> Self {
        self.band_len = band_len;
        self
    }

    /// Sets the output gain.
    pub fn gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Sets the PCM bit depth.
    pub fn bits(mut self, bits_per_sample: u16) -> Self {
        self.bits_per_sample = bits_per_sample;
        self
    }

    /// Harmonic limit of band `index` (`2^index`), saturating at `u32::MAX`.
    pub fn harmonic_limit(&self, index: usize) -> u32 {
        u32::try_from(index)
            .ok()
            .and_then(|shift| 1u32.checked_shl(shift))
            .unwrap_or(u32::MAX)
    }

    /// Harmonic limit of the top band.
    pub fn max_harmonic_limit(&self) -> u32 {
        self.harmonic_limit(self.num_bands.saturating_sub(1))
    }

    /// Total sample count of the bank.
    pub fn total_samples(&self) -> usize {
        self.num_bands.saturating_mul(self.band_len)
    }

    /// Validates the layout.
    ///
    /// No band may exceed Nyquist: `band_len >= 2 * limit` for the top band.
    pub fn validate(&self) -> SpecResult<()> {
        if self.num_bands == 0 || self.num_bands > MAX_NUM_BANDS {
            return Err(SpecError::invalid_layout(format!(
                "num_bands must be in 1..={}, got {}",
                MAX_NUM_BANDS, self.num_bands
            )));
        }

        let nyquist_floor = 2 * self.max_harmonic_limit() as usize;
        if self.band_len < nyquist_floor {
            return Err(SpecError::invalid_layout(format!(
                "band_len must be at least {} for {} bands, got {}",
                nyquist_floor, self.num_bands, self.band_len
            )));
        }

        if !self.gain.is_finite() || self.gain <= 0.0 {
            return Err(SpecError::invalid_layout(format!(
                "gain must be finite and positive, got {}",
                self.gain
            )));
        }

        if !SUPPORTED_BIT_DEPTHS.contains(&self.bits_per_sample) {
            return Err(SpecError::UnsupportedBitDepth(self.bits_per_sample));
        }

        if u32::try_from(self.band_len).is_err() {
            return Err(SpecError::invalid_layout(format!(
                "band_len {} does not fit a WAV sample rate",
                self.band_len
            )));
        }

        let pcm_bytes = self
            .total_samples()
            .checked_mul(usize::from(self.bits_per_sample / 8))
            .filter(|bytes| *bytes <= MAX_PCM_BYTES);
        if pcm_bytes.is_none() {
            return Err(SpecError::invalid_layout(format!(
                "{} bands of {} {}-bit samples exceed the RIFF size limit",
                self.num_bands, self.band_len, self.bits_per_sample
            )));
        }

        Ok(())
    }
}
