//! Error types for synthesis and bank I/O.

use std::path::PathBuf;

use bandtable_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while generating or writing a bank.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Preset or layout failed validation.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The output file could not be created.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Output path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The writer accepted fewer PCM bytes than the bank requires.
    #[error("short write: expected {expected} bytes, wrote {written}")]
    ShortWrite {
        /// Expected PCM byte count.
        expected: usize,
        /// Bytes actually written.
        written: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV decoding error.
    #[error("WAV read error: {0}")]
    Read(#[from] hound::Error),

    /// A file read back does not look like a bank.
    #[error("invalid bank file: {message}")]
    InvalidBank {
        /// Error message.
        message: String,
    },
}

impl SynthError {
    /// Creates an invalid bank error.
    pub fn invalid_bank(message: impl Into<String>) -> Self {
        Self::InvalidBank {
            message: message.into(),
        }
    }
}

impl BackendError for SynthError {
    fn code(&self) -> &'static str {
        match self {
            SynthError::Spec(err) => err.code(),
            SynthError::Open { .. } => "SYNTH_001",
            SynthError::ShortWrite { .. } => "SYNTH_002",
            SynthError::Io(_) => "SYNTH_003",
            SynthError::Read(_) => "SYNTH_004",
            SynthError::InvalidBank { .. } => "SYNTH_005",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            SynthError::Spec(err) => err.category(),
            _ => "synth",
        }
    }
}
