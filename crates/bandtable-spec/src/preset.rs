//! Presets: named bindings of a shape to its generation options.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::shape::Shape;

/// Extension of every generated bank file.
pub const BANK_FILE_EXTENSION: &str = "wav";

/// A named generation request for one bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Display name, also the default file stem.
    pub name: String,
    /// Waveform shape.
    pub shape: Shape,
    /// Shape parameter; `None` means the shape's named default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<f64>,
    /// Phase offset in cycles, added to every sample position.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub phase: f64,
    /// Smoothing override; `None` means the shape's default policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<bool>,
    /// Output file name; `None` means `"{name}.wav"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// A preset with every optional field filled in and validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPreset {
    /// Display name.
    pub name: String,
    /// Output file name.
    pub file_name: String,
    /// Waveform shape.
    pub shape: Shape,
    /// Validated parameter (0.0 for parameterless shapes).
    pub param: f64,
    /// Phase offset in cycles.
    pub phase: f64,
    /// Whether the sinc window is applied.
    pub smoothing: bool,
}

impl Preset {
    /// Creates a preset with defaults for everything but name and shape.
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            param: None,
            phase: 0.0,
            smoothing: None,
            file_name: None,
        }
    }

    /// Sets the shape parameter.
    pub fn param(mut self, param: f64) -> Self {
        self.param = Some(param);
        self
    }

    /// Sets the phase offset.
    pub fn phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Overrides the smoothing policy.
    pub fn smoothing(mut self, enabled: bool) -> Self {
        self.smoothing = Some(enabled);
        self
    }

    /// Sets the output file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Returns the output file name.
    pub fn output_file_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.name, BANK_FILE_EXTENSION))
    }

    /// Validates the preset and fills in defaults.
    pub fn resolve(&self) -> SpecResult<ResolvedPreset> {
        if self.name.trim().is_empty() {
            return Err(SpecError::invalid_preset(&self.name, "name must not be empty"));
        }

        let file_name = self.output_file_name();
        if !is_safe_file_name(&file_name) {
            return Err(SpecError::invalid_preset(
                &self.name,
                format!("unsafe output file name: {}", file_name),
            ));
        }

        if !self.phase.is_finite() {
            return Err(SpecError::InvalidPhase(self.phase));
        }

        Ok(ResolvedPreset {
            name: self.name.clone(),
            file_name,
            shape: self.shape,
            param: self.shape.resolve_param(self.param)?,
            phase: self.phase,
            smoothing: self.smoothing.unwrap_or_else(|| self.shape.default_smoothing()),
        })
    }
}

/// Returns whether `name` is a plain file name that stays inside the output
/// directory.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
        && !name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_fills_defaults() {
        let resolved = Preset::new("Pulse", Shape::Pulse).resolve().unwrap();
        assert_eq!(
            resolved,
            ResolvedPreset {
                name: "Pulse".to_string(),
                file_name: "Pulse.wav".to_string(),
                shape: Shape::Pulse,
                param: 0.3,
                phase: 0.0,
                smoothing: true,
            }
        );
    }

    #[test]
    fn test_resolve_keeps_overrides() {
        let resolved = Preset::new("Soft Sine", Shape::Sine)
            .phase(0.25)
            .smoothing(true)
            .file_name("soft.wav")
            .resolve()
            .unwrap();
        assert_eq!(resolved.file_name, "soft.wav");
        assert_eq!(resolved.phase, 0.25);
        assert!(resolved.smoothing);
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        assert!(Preset::new("", Shape::Square).resolve().is_err());
        assert!(Preset::new("Square", Shape::Square)
            .phase(f64::NAN)
            .resolve()
            .is_err());
        assert!(Preset::new("Pulse", Shape::Pulse).param(1.2).resolve().is_err());
        assert!(Preset::new("Square", Shape::Square)
            .file_name("../escape.wav")
            .resolve()
            .is_err());
    }

    #[test]
    fn test_safe_file_names() {
        assert!(is_safe_file_name("Full-Wave Rectified Sine.wav"));
        assert!(!is_safe_file_name("a/b.wav"));
        assert!(!is_safe_file_name("..\\b.wav"));
        assert!(!is_safe_file_name(".hidden.wav"));
        assert!(!is_safe_file_name(""));
    }

    #[test]
    fn test_serde_skips_defaults() {
        let json = serde_json::to_string(&Preset::new("Square", Shape::Square)).unwrap();
        assert_eq!(json, r#"{"name":"Square","shape":"square"}"#);

        let parsed: Preset =
            serde_json::from_str(r#"{"name":"Wide","shape":"pulse","param":0.6}"#).unwrap();
        assert_eq!(parsed, Preset::new("Wide", Shape::Pulse).param(0.6));

        let unknown = serde_json::from_str::<Preset>(r#"{"name":"X","shape":"sine","gain":2}"#);
        assert!(unknown.is_err());
    }
}
