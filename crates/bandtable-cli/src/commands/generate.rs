//! Generate command implementation
//!
//! Writes one bank file per preset into the output directory. A failing
//! preset is reported and skipped; the run continues with the rest.

use anyhow::{Context, Result};
use bandtable_spec::{BankLayout, LayoutConfig, Manifest, Preset, SpecError};
use bandtable_synth::{generate_resolved, write_bank, SynthError};
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, BankRecord, GenerateOutput, JsonError, LayoutInfo};

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "./wavetables";

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output directory (default: ./wavetables)
    pub out_dir: Option<String>,
    /// Manifest file with a layout and preset list
    pub manifest: Option<String>,
    /// Restrict generation to these preset names (case-insensitive)
    pub only: Vec<String>,
    /// Layout overrides from the command line
    pub layout: LayoutConfig,
    /// Emit a JSON summary instead of colored output
    pub json: bool,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 if every bank was written, 1 otherwise
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);

    let prepared = plan(options).and_then(|plan| {
        fs::create_dir_all(out_dir).map_err(|e| {
            JsonError::new(
                error_codes::OUTPUT_DIR,
                format!("Failed to create output directory {}: {}", out_dir, e),
            )
        })?;
        Ok(plan)
    });

    let plan = match prepared {
        Ok(plan) => plan,
        Err(err) if options.json => {
            let output = GenerateOutput {
                success: false,
                out_dir: out_dir.to_string(),
                layout: None,
                successful: 0,
                failed: 0,
                banks: Vec::new(),
                errors: vec![err],
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
        Err(err) => anyhow::bail!("{}", err.message),
    };

    if !options.json {
        println!(
            "{} Generating {} banks into {} ({} bands x {} samples, {}-bit)",
            "INFO".blue().bold(),
            plan.presets.len(),
            out_dir,
            plan.layout.num_bands,
            plan.layout.band_len,
            plan.layout.bits_per_sample
        );
    }

    let records = generate_all(&plan.presets, &plan.layout, Path::new(out_dir), options.json);
    let failed = records.iter().filter(|r| !r.success).count();

    if options.json {
        let output = GenerateOutput {
            success: failed == 0,
            out_dir: out_dir.to_string(),
            layout: Some(LayoutInfo::from(&plan.layout)),
            successful: records.len() - failed,
            failed,
            banks: records,
            errors: Vec::new(),
        };
        print_json(&output)?;
    } else {
        print_summary(&records);
    }

    if failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// What a run will generate.
#[derive(Debug)]
struct Plan {
    layout: BankLayout,
    presets: Vec<Preset>,
}

/// Loads the manifest, applies overrides, and selects presets.
fn plan(options: &GenerateOptions) -> std::result::Result<Plan, JsonError> {
    let manifest = match &options.manifest {
        Some(path) => Manifest::from_file(Path::new(path)).map_err(|e| {
            JsonError::new(
                error_codes::MANIFEST,
                format!("Failed to load manifest {}: {}", path, e),
            )
        })?,
        None => Manifest::default(),
    };

    let layout = manifest
        .layout
        .merge(options.layout)
        .resolve()
        .map_err(|e| JsonError::from_backend(&e))?;

    let presets = select_presets(manifest.presets(), &options.only)?;
    Ok(Plan { layout, presets })
}

/// Keeps the presets named in `only`, or all of them when `only` is empty.
fn select_presets(
    presets: Vec<Preset>,
    only: &[String],
) -> std::result::Result<Vec<Preset>, JsonError> {
    if only.is_empty() {
        return Ok(presets);
    }

    if let Some(missing) = only
        .iter()
        .find(|name| !presets.iter().any(|p| p.name.eq_ignore_ascii_case(name)))
    {
        return Err(JsonError::new(
            error_codes::UNKNOWN_PRESET,
            format!("Unknown preset: {}", missing),
        ));
    }

    Ok(presets
        .into_iter()
        .filter(|p| only.iter().any(|name| p.name.eq_ignore_ascii_case(name)))
        .collect())
}

/// Generates every preset, collecting one record each.
pub fn generate_all(
    presets: &[Preset],
    layout: &BankLayout,
    out_dir: &Path,
    quiet: bool,
) -> Vec<BankRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(presets.len());

    for preset in presets {
        let record = process_preset(preset, layout, out_dir, &mut seen);
        if !quiet {
            print_record(&record);
        }
        records.push(record);
    }

    records
}

/// Generates and writes a single preset.
fn process_preset(
    preset: &Preset,
    layout: &BankLayout,
    out_dir: &Path,
    seen: &mut HashSet<String>,
) -> BankRecord {
    let start = Instant::now();
    let mut record = BankRecord {
        name: preset.name.clone(),
        file_name: None,
        success: false,
        bytes_written: None,
        pcm_hash: None,
        duration_ms: 0,
        error: None,
    };

    let outcome = preset
        .resolve()
        .map_err(SynthError::from)
        .and_then(|resolved| {
            record.file_name = Some(resolved.file_name.clone());
            if !seen.insert(resolved.file_name.to_lowercase()) {
                return Err(SpecError::DuplicateFileName(resolved.file_name.clone()).into());
            }
            let bank = generate_resolved(&resolved, layout)?;
            let path: PathBuf = out_dir.join(&resolved.file_name);
            write_bank(&bank, &path)
        });

    match outcome {
        Ok(report) => {
            record.success = true;
            record.bytes_written = Some(report.bytes_written);
            record.pcm_hash = Some(report.pcm_hash);
        }
        Err(err) => record.error = Some(JsonError::from_backend(&err)),
    }

    record.duration_ms = start.elapsed().as_millis() as u64;
    record
}

fn print_record(record: &BankRecord) {
    let file = record.file_name.as_deref().unwrap_or("-");
    if record.success {
        println!(
            "  {} {} -> {} ({}ms)",
            "SUCCESS".green(),
            record.name,
            file,
            record.duration_ms
        );
    } else {
        println!(
            "  {} {} - {}",
            "FAILED".red(),
            record.name,
            record
                .error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or("unknown error")
        );
    }
}

fn print_summary(records: &[BankRecord]) {
    let failed: Vec<_> = records.iter().filter(|r| !r.success).collect();

    println!();
    println!("{} {}", "Successful:".green().bold(), records.len() - failed.len());
    println!("{} {}", "Failed:".red().bold(), failed.len());

    if !failed.is_empty() {
        println!();
        println!("{}", "Failed presets:".red().bold());
        for record in failed {
            println!(
                "  - {}: {}",
                record.name,
                record
                    .error
                    .as_ref()
                    .map(|e| format!("{} ({})", e.message, e.code))
                    .unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }
}

fn print_json(output: &GenerateOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandtable_spec::Shape;
    use pretty_assertions::assert_eq;

    fn small_layout() -> LayoutConfig {
        LayoutConfig {
            num_bands: Some(3),
            band_len: Some(16),
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_select_presets_case_insensitive() {
        let presets = bandtable_spec::builtin_presets();
        let picked = select_presets(presets, &["square".to_string(), "SINE".to_string()]).unwrap();
        let names: Vec<_> = picked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sine", "Square"]);
    }

    #[test]
    fn test_select_presets_unknown_name() {
        let err = select_presets(bandtable_spec::builtin_presets(), &["Kazoo".to_string()])
            .unwrap_err();
        assert_eq!(err.code, error_codes::UNKNOWN_PRESET);
        assert!(err.message.contains("Kazoo"));
    }

    #[test]
    fn test_plan_applies_overrides() {
        let options = GenerateOptions {
            layout: LayoutConfig {
                bits_per_sample: Some(24),
                ..small_layout()
            },
            ..GenerateOptions::default()
        };
        let plan = plan(&options).unwrap();
        assert_eq!(plan.layout.num_bands, 3);
        assert_eq!(plan.layout.band_len, 16);
        assert_eq!(plan.layout.bits_per_sample, 24);
        assert_eq!(plan.presets.len(), 19);
    }

    #[test]
    fn test_plan_rejects_invalid_layout() {
        let options = GenerateOptions {
            layout: LayoutConfig {
                bits_per_sample: Some(12),
                ..LayoutConfig::default()
            },
            ..GenerateOptions::default()
        };
        let err = plan(&options).unwrap_err();
        assert_eq!(err.code, "SPEC_006");
    }

    #[test]
    fn test_plan_reports_missing_manifest() {
        let options = GenerateOptions {
            manifest: Some("/nonexistent/bandtable.json".to_string()),
            ..GenerateOptions::default()
        };
        assert_eq!(plan(&options).unwrap_err().code, error_codes::MANIFEST);
    }

    #[test]
    fn test_run_reports_unusable_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();

        let options = GenerateOptions {
            out_dir: Some(blocker.join("banks").to_string_lossy().to_string()),
            layout: small_layout(),
            json: true,
            ..GenerateOptions::default()
        };
        assert_eq!(run(&options).unwrap(), ExitCode::from(1));

        let options = GenerateOptions {
            json: false,
            ..options
        };
        let err = run(&options).unwrap_err();
        assert!(err.to_string().contains("output directory"));
    }

    #[test]
    fn test_generate_all_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let layout = small_layout().resolve().unwrap();
        let presets = vec![
            Preset::new("Square", Shape::Square),
            Preset::new("Broken Pulse", Shape::Pulse).param(2.0),
            Preset::new("Square Again", Shape::Square).file_name("square.wav"),
            Preset::new("Triangle", Shape::Triangle),
        ];

        let records = generate_all(&presets, &layout, dir.path(), true);
        let ok: Vec<_> = records.iter().map(|r| r.success).collect();
        assert_eq!(ok, vec![true, false, false, true]);

        assert_eq!(records[1].error.as_ref().unwrap().code, "SPEC_001");
        assert_eq!(records[2].error.as_ref().unwrap().code, "SPEC_008");
        assert_eq!(records[0].bytes_written, Some(3 * 16 * 2));
        assert!(dir.path().join("Square.wav").exists());
        assert!(dir.path().join("Triangle.wav").exists());
        assert!(!dir.path().join("Broken Pulse.wav").exists());
    }

    #[test]
    fn test_run_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("banks");
        let manifest = dir.path().join("bandtable.json");
        fs::write(
            &manifest,
            r#"{
                "layout": { "num_bands": 3, "band_len": 16 },
                "presets": [
                    { "name": "Saw", "shape": "sawtooth" },
                    { "name": "Bad Organ", "shape": "hammond", "param": 12 }
                ]
            }"#,
        )
        .unwrap();

        let mut options = GenerateOptions {
            out_dir: Some(out_dir.to_string_lossy().to_string()),
            manifest: Some(manifest.to_string_lossy().to_string()),
            json: true,
            ..GenerateOptions::default()
        };
        assert_eq!(run(&options).unwrap(), ExitCode::from(1));
        assert!(out_dir.join("Saw.wav").exists());

        options.only = vec!["saw".to_string()];
        assert_eq!(run(&options).unwrap(), ExitCode::SUCCESS);
    }
}
