//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `generate`, `list`, and `inspect`.

use bandtable_spec::{BackendError, BankLayout, ResolvedPreset};
use bandtable_synth::BandStats;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Library errors pass their own codes (`SPEC_xxx`, `SYNTH_xxx`) through.
pub mod error_codes {
    /// Manifest could not be read or parsed
    pub const MANIFEST: &str = "CLI_001";
    /// Output directory could not be created
    pub const OUTPUT_DIR: &str = "CLI_002";
    /// `--only` named a preset that does not exist
    pub const UNKNOWN_PRESET: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SPEC_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: None,
        }
    }

    /// Converts a library error, keeping its code and category.
    pub fn from_backend<E: BackendError + ?Sized>(err: &E) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message(),
            category: Some(err.category().to_string()),
        }
    }
}

/// Layout echoed in reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutInfo {
    /// Number of bands
    pub num_bands: usize,
    /// Samples per band
    pub band_len: usize,
    /// Output gain
    pub gain: f64,
    /// PCM bit depth
    pub bits_per_sample: u16,
}

impl From<&BankLayout> for LayoutInfo {
    fn from(layout: &BankLayout) -> Self {
        Self {
            num_bands: layout.num_bands,
            band_len: layout.band_len,
            gain: layout.gain,
            bits_per_sample: layout.bits_per_sample,
        }
    }
}

/// Result of generating one bank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankRecord {
    /// Preset name
    pub name: String,
    /// Output file name, if the preset resolved far enough to have one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Whether the bank was written
    pub success: bool,
    /// PCM bytes written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_written: Option<usize>,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Synthesis and write time in milliseconds
    pub duration_ms: u64,
    /// Failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    /// Whether every bank was written
    pub success: bool,
    /// Output directory
    pub out_dir: String,
    /// Resolved layout; absent when the configuration itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutInfo>,
    /// Banks written
    pub successful: usize,
    /// Banks that failed
    pub failed: usize,
    /// Per-bank results, in preset order
    pub banks: Vec<BankRecord>,
    /// Configuration errors that stopped the run before any bank
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// One preset in `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetInfo {
    /// Preset name
    pub name: String,
    /// Shape identifier
    pub shape: String,
    /// Parameter name, for shapes that take one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    /// Resolved parameter value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<f64>,
    /// Phase offset in cycles
    pub phase: f64,
    /// Whether the sinc window is applied
    pub smoothing: bool,
    /// Output file name
    pub file_name: String,
}

impl From<&ResolvedPreset> for PresetInfo {
    fn from(preset: &ResolvedPreset) -> Self {
        let param = preset.shape.param();
        Self {
            name: preset.name.clone(),
            shape: preset.shape.id().to_string(),
            param_name: param.map(|p| p.name.to_string()),
            param: param.map(|_| preset.param),
            phase: preset.phase,
            smoothing: preset.smoothing,
            file_name: preset.file_name.clone(),
        }
    }
}

/// Per-band levels in `inspect --json`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandInfo {
    /// Band index
    pub index: usize,
    /// Harmonic limit
    pub limit: u32,
    /// Largest absolute sample
    pub peak: f64,
    /// Mean
    pub mean: f64,
    /// Root mean square
    pub rms: f64,
}

impl BandInfo {
    /// Converts measured stats for band `index`.
    pub fn new(index: usize, stats: &BandStats) -> Self {
        Self {
            index,
            limit: stats.limit,
            peak: stats.peak,
            mean: stats.mean,
            rms: stats.rms,
        }
    }
}

/// Output of `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    /// Inspected file
    pub input: String,
    /// Layout implied by the file
    pub layout: LayoutInfo,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Per-band levels
    pub bands: Vec<BandInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandtable_spec::{Preset, Shape, SpecError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_error_from_backend() {
        let err = SpecError::UnsupportedBitDepth(12);
        let json = JsonError::from_backend(&err);
        assert_eq!(json.code, "SPEC_006");
        assert_eq!(json.category.as_deref(), Some("spec"));
        assert!(json.message.contains("12"));
    }

    #[test]
    fn test_preset_info_hides_param_for_parameterless_shapes() {
        let sine = Preset::new("Sine", Shape::Sine).resolve().unwrap();
        let info = PresetInfo::from(&sine);
        assert_eq!(info.param, None);
        assert_eq!(info.shape, "sine");
        assert!(!info.smoothing);

        let pulse = Preset::new("Pulse", Shape::Pulse).resolve().unwrap();
        let info = PresetInfo::from(&pulse);
        assert_eq!(info.param_name.as_deref(), Some("duty"));
        assert_eq!(info.param, Some(0.3));
    }

    #[test]
    fn test_bank_record_skips_empty_fields() {
        let record = BankRecord {
            name: "Pulse".to_string(),
            file_name: None,
            success: false,
            bytes_written: None,
            pcm_hash: None,
            duration_ms: 0,
            error: Some(JsonError::new("SPEC_001", "duty out of range")),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("pcm_hash"));
        assert!(json.contains("SPEC_001"));
    }
}
