//! List command implementation
//!
//! Prints the preset catalog (or a manifest's presets) with resolved
//! parameters and output file names.

use anyhow::{Context, Result};
use bandtable_spec::{builtin_presets, Manifest, Preset};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{JsonError, PresetInfo};

/// Run the list command
///
/// # Arguments
/// * `manifest` - Optional manifest whose presets replace the built-in catalog
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every preset resolves, 1 otherwise
pub fn run(manifest: Option<&str>, json: bool) -> Result<ExitCode> {
    let presets = match manifest {
        Some(path) => Manifest::from_file(Path::new(path))
            .with_context(|| format!("Failed to load manifest: {}", path))?
            .presets(),
        None => builtin_presets(),
    };

    let (infos, errors) = describe(&presets);

    if json {
        let output = serde_json::json!({
            "success": errors.is_empty(),
            "presets": infos,
            "errors": errors,
        });
        let text =
            serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
        println!("{}", text);
    } else {
        print_table(&infos);
        for error in &errors {
            println!("{} {}", "INVALID".red().bold(), error.message);
        }
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Resolves each preset, separating the valid ones from the errors.
fn describe(presets: &[Preset]) -> (Vec<PresetInfo>, Vec<JsonError>) {
    let mut infos = Vec::new();
    let mut errors = Vec::new();
    for preset in presets {
        match preset.resolve() {
            Ok(resolved) => infos.push(PresetInfo::from(&resolved)),
            Err(e) => errors.push(JsonError::from_backend(&e)),
        }
    }
    (infos, errors)
}

fn print_table(infos: &[PresetInfo]) {
    let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
    println!("{}", "Presets:".blue().bold());
    for info in infos {
        let param = match (&info.param_name, info.param) {
            (Some(name), Some(value)) => format!("{}={}", name, value),
            _ => String::new(),
        };
        let smoothing = if info.smoothing { "" } else { " (unsmoothed)" };
        println!(
            "  {}  {:<22} {:<16} {}{}",
            format!("{:width$}", info.name).bold(),
            info.shape,
            param,
            info.file_name.dimmed(),
            smoothing,
        );
    }
}
