//! JSON manifests: a layout plus a preset list.
//!
//! ```json
//! {
//!   "layout": { "num_bands": 6, "bits_per_sample": 24 },
//!   "presets": [
//!     { "name": "Wide Pulse", "shape": "pulse", "param": 0.6 },
//!     { "name": "Sine", "shape": "sine", "phase": 0.25 }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Missing layout fields fall back to the defaults in
//! [`crate::layout`]; an empty preset list means the built-in catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::builtin_presets;
use crate::error::{SpecError, SpecResult};
use crate::layout::{
    default_band_len, BankLayout, DEFAULT_BITS_PER_SAMPLE, DEFAULT_GAIN, DEFAULT_NUM_BANDS,
};
use crate::preset::{Preset, ResolvedPreset};

/// Partially specified layout, as read from a manifest or the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Number of bands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_bands: Option<usize>,
    /// Samples per band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band_len: Option<usize>,
    /// Output gain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
    /// PCM bit depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits_per_sample: Option<u16>,
}

impl LayoutConfig {
    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            num_bands: other.num_bands.or(self.num_bands),
            band_len: other.band_len.or(self.band_len),
            gain: other.gain.or(self.gain),
            bits_per_sample: other.bits_per_sample.or(self.bits_per_sample),
        }
    }

    /// Fills in defaults and validates the result.
    ///
    /// The default band length follows the resolved band count.
    pub fn resolve(&self) -> SpecResult<BankLayout> {
        let num_bands = self.num_bands.unwrap_or(DEFAULT_NUM_BANDS);
        let layout = BankLayout {
            num_bands,
            band_len: self.band_len.unwrap_or_else(|| default_band_len(num_bands)),
            gain: self.gain.unwrap_or(DEFAULT_GAIN),
            bits_per_sample: self.bits_per_sample.unwrap_or(DEFAULT_BITS_PER_SAMPLE),
        };
        layout.validate()?;
        Ok(layout)
    }
}

/// A generation manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Layout shared by all presets.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Presets to generate; empty means the built-in catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<Preset>,
}

impl Manifest {
    /// Parses a manifest from JSON.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a manifest file.
    pub fn from_file(path: &Path) -> SpecResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns the presets to generate.
    pub fn presets(&self) -> Vec<Preset> {
        if self.presets.is_empty() {
            builtin_presets()
        } else {
            self.presets.clone()
        }
    }

    /// Validates every preset and checks that output file names are unique.
    ///
    /// Stops at the first invalid preset; use [`Preset::resolve`] directly to
    /// collect per-preset failures.
    pub fn resolve_presets(&self) -> SpecResult<Vec<ResolvedPreset>> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        for preset in self.presets() {
            let preset = preset.resolve()?;
            if !seen.insert(preset.file_name.to_lowercase()) {
                return Err(SpecError::DuplicateFileName(preset.file_name));
            }
            resolved.push(preset);
        }
        Ok(resolved)
    }
}
