//! Band-limited wavetable bank synthesis.
//!
//! A bank is `num_bands` single-cycle tables of `band_len` samples each,
//! stored back to back in one buffer. Band `i` sums harmonics `0..=2^i` of
//! the series, optionally tapered by the sinc smoothing window.

use bandtable_spec::{BankLayout, ResolvedPreset, SpecError};
use rayon::prelude::*;

use crate::error::{SynthError, SynthResult};
use crate::series::{smoothing_weight, FourierSeries};

/// Per-bank options that do not belong to the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankOptions {
    /// Phase offset in cycles, added to every sample position.
    pub phase: f64,
    /// Whether the sinc window is applied to harmonics `k >= 1`.
    pub smoothing: bool,
}

impl Default for BankOptions {
    fn default() -> Self {
        Self {
            phase: 0.0,
            smoothing: true,
        }
    }
}

impl BankOptions {
    /// Options carried by a resolved preset.
    pub fn from_preset(preset: &ResolvedPreset) -> Self {
        Self {
            phase: preset.phase,
            smoothing: preset.smoothing,
        }
    }
}

/// A synthesized bank: every band of one waveform, lowest limit first.
#[derive(Debug, Clone, PartialEq)]
pub struct WavetableBank {
    layout: BankLayout,
    samples: Vec<f64>,
}

/// Level summary of one band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandStats {
    /// Harmonic limit of the band.
    pub limit: u32,
    /// Largest absolute sample.
    pub peak: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Root mean square.
    pub rms: f64,
}

impl BandStats {
    /// Measures `band`.
    pub fn measure(limit: u32, band: &[f64]) -> Self {
        let n = band.len().max(1) as f64;
        Self {
            limit,
            peak: band.iter().fold(0.0, |m, s| m.max(s.abs())),
            mean: band.iter().sum::<f64>() / n,
            rms: (band.iter().map(|s| s * s).sum::<f64>() / n).sqrt(),
        }
    }
}

impl WavetableBank {
    /// Assembles a bank from an existing buffer.
    ///
    /// The buffer must hold exactly `layout.total_samples()` samples.
    pub fn from_parts(layout: BankLayout, samples: Vec<f64>) -> SynthResult<Self> {
        if samples.len() != layout.total_samples() || layout.band_len == 0 {
            return Err(SynthError::invalid_bank(format!(
                "{} samples do not fill {} bands of {}",
                samples.len(),
                layout.num_bands,
                layout.band_len
            )));
        }
        Ok(Self { layout, samples })
    }

    /// Returns the layout the bank was synthesized with.
    pub fn layout(&self) -> &BankLayout {
        &self.layout
    }

    /// Returns the flat sample buffer.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns band `index`, or `None` past the last band.
    pub fn band(&self, index: usize) -> Option<&[f64]> {
        let len = self.layout.band_len;
        let start = index.checked_mul(len)?;
        self.samples.get(start..start.checked_add(len)?)
    }

    /// Iterates over the bands in increasing-limit order.
    pub fn bands(&self) -> std::slice::ChunksExact<'_, f64> {
        self.samples.chunks_exact(self.layout.band_len)
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the bank holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Measures every band.
    pub fn stats(&self) -> Vec<BandStats> {
        self.bands()
            .enumerate()
            .map(|(i, band)| BandStats::measure(self.layout.harmonic_limit(i), band))
            .collect()
    }

    /// Consumes the bank, returning the flat buffer.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Synthesizes every band of `series` under `layout`.
///
/// Bands are filled in parallel; each writes only its own slice, so the
/// output does not depend on scheduling.
pub fn synthesize<S>(
    series: &S,
    options: &BankOptions,
    layout: &BankLayout,
) -> SynthResult<WavetableBank>
where
    S: FourierSeries + ?Sized,
{
    layout.validate()?;
    if !options.phase.is_finite() {
        return Err(SpecError::InvalidPhase(options.phase).into());
    }

    let mut samples = vec![0.0; layout.total_samples()];
    samples
        .par_chunks_mut(layout.band_len)
        .enumerate()
        .for_each(|(index, band)| {
            render_band(series, options, layout, layout.harmonic_limit(index), band)
        });

    Ok(WavetableBank {
        layout: *layout,
        samples,
    })
}

/// Fills one band with harmonics `0..=limit`.
pub fn render_band<S>(
    series: &S,
    options: &BankOptions,
    layout: &BankLayout,
    limit: u32,
    out: &mut [f64],
) where
    S: FourierSeries + ?Sized,
{
    let weights: Vec<f64> = (1..=limit)
        .map(|k| {
            if options.smoothing {
                smoothing_weight(k, limit)
            } else {
                1.0
            }
        })
        .collect();

    let len = out.len() as f64;
    for (j, sample) in out.iter_mut().enumerate() {
        let t = (j as f64 / len + options.phase).rem_euclid(1.0);
        let mut sum = series.term(t, 0, limit);
        for (k, weight) in (1..=limit).zip(&weights) {
            sum += series.term(t, k, limit) * weight;
        }
        *sample = layout.gain * sum;
    }
}
