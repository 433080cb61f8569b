//! bandtable CLI - Command-line interface for band-limited wavetable banks
//!
//! This binary generates wavetable bank files from the built-in preset
//! catalog or a JSON manifest, lists presets, and inspects written banks.

use bandtable_spec::LayoutConfig;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use bandtable_cli::commands;

/// bandtable - Band-limited wavetable bank generator
#[derive(Parser)]
#[command(name = "bandtable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one bank file per preset
    Generate {
        /// Output directory (default: ./wavetables)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// JSON manifest with a layout and preset list
        #[arg(short, long)]
        manifest: Option<String>,

        /// Only generate the named preset (repeatable, case-insensitive)
        #[arg(long)]
        only: Vec<String>,

        /// PCM bit depth (8, 16, 24, 32)
        #[arg(long, value_parser = clap::value_parser!(u16).range(8..=32))]
        bits: Option<u16>,

        /// Number of bands (harmonic limits 1, 2, 4, ...)
        #[arg(long)]
        bands: Option<usize>,

        /// Samples per band (default: derived from the band count)
        #[arg(long)]
        band_len: Option<usize>,

        /// Output gain applied to every sample (default: 1/sqrt(2))
        #[arg(long)]
        gain: Option<f64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List presets with their shapes, parameters, and file names
    List {
        /// List a manifest's presets instead of the built-in catalog
        #[arg(short, long)]
        manifest: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Read a bank file back and print per-band levels
    Inspect {
        /// Path to the bank file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            manifest,
            only,
            bits,
            bands,
            band_len,
            gain,
            json,
        } => commands::generate::run(&commands::generate::GenerateOptions {
            out_dir,
            manifest,
            only,
            layout: LayoutConfig {
                num_bands: bands,
                band_len,
                gain,
                bits_per_sample: bits,
            },
            json,
        }),
        Commands::List { manifest, json } => commands::list::run(manifest.as_deref(), json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
