//! bandtable Synthesis Engine
//!
//! This crate turns catalog shapes into band-limited wavetable banks and
//! writes them as WAV files.
//!
//! # Overview
//!
//! Every shape is a closed-form Fourier series. A bank holds one
//! single-cycle table per band; band `i` sums harmonics up to `2^i`, so a
//! player can pick the richest band that stays below Nyquist at any pitch.
//! A sinc window tapers the top harmonics of each band to suppress Gibbs
//! ringing, and every sample is scaled by the layout gain.
//!
//! # Determinism
//!
//! Bands are computed in parallel, but each band owns a disjoint slice of the
//! output and is evaluated in a fixed order, so banks are bit-identical
//! across runs. Files carry no timestamps; the BLAKE3 hash of the PCM
//! payload identifies a bank's content.
//!
//! # Example
//!
//! ```
//! use bandtable_spec::{BankLayout, Shape};
//! use bandtable_synth::{synthesize, BankOptions, Waveform};
//!
//! let square = Waveform::new(Shape::Square, None).unwrap();
//! let layout = BankLayout::with_bands(4).band_len(64);
//! let bank = synthesize(&square, &BankOptions::default(), &layout).unwrap();
//! assert_eq!(bank.len(), 4 * 64);
//! ```
//!
//! # Crate Structure
//!
//! - [`series`] - Fourier series for every catalog shape
//! - [`bank`] - Band-limited bank synthesis
//! - [`generate()`] - Preset-level entry point
//! - [`wav`] - Deterministic WAV writer and `hound`-based reader

pub mod bank;
pub mod error;
pub mod generate;
pub mod series;
pub mod wav;

// Re-export main types
pub use bank::{synthesize, BandStats, BankOptions, WavetableBank};
pub use error::{SynthError, SynthResult};
pub use generate::{generate, generate_resolved, write_bank};
pub use series::{FnSeries, FourierSeries, Waveform};
pub use wav::{read_bank, WavFile, WavFormat, WriteReport};
