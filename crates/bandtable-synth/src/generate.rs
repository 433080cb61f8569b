//! Preset-level entry points: synthesize a bank and write it to disk.

use std::path::Path;

use bandtable_spec::{BankLayout, Preset, ResolvedPreset};

use crate::bank::{synthesize, BankOptions, WavetableBank};
use crate::error::SynthResult;
use crate::series::Waveform;
use crate::wav::{WavFile, WavFormat, WriteReport};

/// Resolves `preset` and synthesizes its bank.
pub fn generate(preset: &Preset, layout: &BankLayout) -> SynthResult<WavetableBank> {
    generate_resolved(&preset.resolve()?, layout)
}

/// Synthesizes the bank for an already resolved preset.
pub fn generate_resolved(preset: &ResolvedPreset, layout: &BankLayout) -> SynthResult<WavetableBank> {
    let waveform = Waveform::from_preset(preset);
    synthesize(&waveform, &BankOptions::from_preset(preset), layout)
}

/// Writes `bank` to `path` at the bank's bit depth.
pub fn write_bank(bank: &WavetableBank, path: &Path) -> SynthResult<WriteReport> {
    let format = WavFormat::for_bank(bank.layout())?;
    WavFile::create(path, format)?.write(bank.samples())
}
