//! Inspect command implementation
//!
//! Reads a bank file back and prints per-band levels.

use anyhow::{Context, Result};
use bandtable_synth::read_bank;
use bandtable_synth::wav::compute_pcm_hash;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use super::json_output::{BandInfo, InspectOutput, LayoutInfo};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to a bank file
/// * `json` - Whether to output machine-readable JSON
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let output = inspect(input)?;

    if json {
        let text =
            serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "File:".blue().bold(), output.input);
    println!(
        "{} {} bands x {} samples, {}-bit",
        "Layout:".blue().bold(),
        output.layout.num_bands,
        output.layout.band_len,
        output.layout.bits_per_sample
    );
    if let Some(hash) = &output.pcm_hash {
        println!("{} {}", "PCM hash:".blue().bold(), hash);
    }
    println!();
    println!(
        "  {:>4}  {:>6}  {:>9}  {:>9}  {:>9}",
        "band", "limit", "peak", "mean", "rms"
    );
    for band in &output.bands {
        let line = format!(
            "  {:>4}  {:>6}  {:>9.5}  {:>9.5}  {:>9.5}",
            band.index, band.limit, band.peak, band.mean, band.rms
        );
        if band.peak >= 1.0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads `input` and measures every band.
pub fn inspect(input: &str) -> Result<InspectOutput> {
    let bank = read_bank(input).with_context(|| format!("Failed to read bank: {}", input))?;
    let bytes = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;

    Ok(InspectOutput {
        input: input.to_string(),
        layout: LayoutInfo::from(bank.layout()),
        pcm_hash: compute_pcm_hash(&bytes),
        bands: bank
            .stats()
            .iter()
            .enumerate()
            .map(|(i, stats)| BandInfo::new(i, stats))
            .collect(),
    })
}
