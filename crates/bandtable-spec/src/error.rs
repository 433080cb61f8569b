//! Error types for catalog, preset, and layout validation.

use thiserror::Error;

use crate::shape::Shape;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while validating presets, layouts, and manifests.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A real-valued shape parameter fell outside its documented domain.
    #[error("{shape}: parameter '{name}' must be in {domain}, got {value}")]
    ParamOutOfDomain {
        /// Shape the parameter belongs to.
        shape: Shape,
        /// Parameter name.
        name: &'static str,
        /// Human-readable domain, e.g. `(0, 1)`.
        domain: String,
        /// Rejected value.
        value: f64,
    },

    /// A stop or drawbar count was not an integer in range.
    #[error("{shape}: parameter '{name}' must be an integer in {min}..={max}, got {value}")]
    InvalidCount {
        /// Shape the parameter belongs to.
        shape: Shape,
        /// Parameter name.
        name: &'static str,
        /// Smallest accepted count.
        min: u32,
        /// Largest accepted count.
        max: u32,
        /// Rejected value.
        value: f64,
    },

    /// A parameter was supplied for a shape that takes none.
    #[error("{shape} takes no parameter, got {value}")]
    UnexpectedParam {
        /// Shape that takes no parameter.
        shape: Shape,
        /// Supplied value.
        value: f64,
    },

    /// Phase offset is NaN or infinite.
    #[error("phase offset must be finite, got {0}")]
    InvalidPhase(f64),

    /// Bank layout is unusable.
    #[error("invalid bank layout: {0}")]
    InvalidLayout(String),

    /// Bit depth is not one of the supported PCM widths.
    #[error("unsupported bit depth: {0} (expected 8, 16, 24 or 32)")]
    UnsupportedBitDepth(u16),

    /// Preset-level problem (empty name, unsafe file name, ...).
    #[error("invalid preset '{name}': {message}")]
    InvalidPreset {
        /// Preset name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Two presets would write the same output file.
    #[error("duplicate output file name: {0}")]
    DuplicateFileName(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates an invalid preset error.
    pub fn invalid_preset(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPreset {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid layout error.
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout(message.into())
    }
}

/// Common interface for errors surfaced in generation reports.
///
/// Implementors provide a stable machine-readable code and a category so
/// the CLI can report failures uniformly across crates.
pub trait BackendError: std::error::Error {
    /// Stable error code such as `"SPEC_003"` or `"SYNTH_002"`.
    fn code(&self) -> &'static str;

    /// Human-readable message, `Display` by default.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category such as `"spec"` or `"synth"`.
    fn category(&self) -> &'static str;
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::ParamOutOfDomain { .. } => "SPEC_001",
            SpecError::InvalidCount { .. } => "SPEC_002",
            SpecError::UnexpectedParam { .. } => "SPEC_003",
            SpecError::InvalidPhase(_) => "SPEC_004",
            SpecError::InvalidLayout(_) => "SPEC_005",
            SpecError::UnsupportedBitDepth(_) => "SPEC_006",
            SpecError::InvalidPreset { .. } => "SPEC_007",
            SpecError::DuplicateFileName(_) => "SPEC_008",
            SpecError::JsonParse(_) => "SPEC_009",
            SpecError::Io(_) => "SPEC_010",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}
