//! bandtable Catalog Library
//!
//! This crate provides the data model for band-limited wavetable generation:
//! the enumerated shape catalog, presets binding shapes to generation options,
//! the bank layout, JSON manifests, and their validation.
//!
//! # Example
//!
//! ```
//! use bandtable_spec::{BankLayout, Preset, Shape};
//!
//! let preset = Preset::new("Wide Pulse", Shape::Pulse).param(0.6);
//! let resolved = preset.resolve().unwrap();
//! assert_eq!(resolved.file_name, "Wide Pulse.wav");
//!
//! let layout = BankLayout::default();
//! assert_eq!(layout.total_samples(), 8 * 512);
//! assert!(layout.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`shape`]: Shape identifiers, parameter domains, and named defaults
//! - [`preset`]: Presets and their resolution
//! - [`catalog`]: Built-in preset list
//! - [`layout`]: Bank layout and its validation
//! - [`manifest`]: JSON manifests
//! - [`error`]: Error types

pub mod catalog;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod preset;
pub mod shape;

// Re-export commonly used types at the crate root
pub use catalog::{builtin_presets, find_builtin};
pub use error::{BackendError, SpecError, SpecResult};
pub use layout::{
    default_band_len, BankLayout, DEFAULT_BITS_PER_SAMPLE, DEFAULT_GAIN, DEFAULT_NUM_BANDS,
    MAX_NUM_BANDS, MAX_PCM_BYTES, SUPPORTED_BIT_DEPTHS,
};
pub use manifest::{LayoutConfig, Manifest};
pub use preset::{is_safe_file_name, Preset, ResolvedPreset, BANK_FILE_EXTENSION};
pub use shape::{Domain, ParamSpec, Shape};
