//! Built-in preset catalog.

use crate::preset::Preset;
use crate::shape::{Shape, DEFAULT_FILTER_CUTOFF};

/// Returns the built-in presets, one bank file each, sorted by name.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Circle", Shape::Circle),
        Preset::new("Combo Organ", Shape::ComboOrgan).param(3.0),
        Preset::new("Cycloid", Shape::Cycloid),
        Preset::new("Filtered Square", Shape::FilteredSquare).param(DEFAULT_FILTER_CUTOFF),
        Preset::new("Full Organ", Shape::Hammond).param(9.0),
        Preset::new("Full-Wave Rectified Sine", Shape::FullRectifiedSine),
        Preset::new("Half-Wave Rectified Sine", Shape::HalfRectifiedSine),
        Preset::new("Hammond", Shape::Hammond).param(3.0),
        Preset::new("Modified Square", Shape::ModifiedSquare).param(0.25),
        Preset::new("Modified Triangle", Shape::ModifiedTriangle).param(0.3),
        Preset::new("Narrow Pulse", Shape::Pulse).param(0.1),
        Preset::new("Pulse", Shape::Pulse).param(0.3),
        Preset::new("Sawtooth", Shape::Sawtooth),
        Preset::new("Sine", Shape::Sine),
        Preset::new("Square", Shape::Square),
        Preset::new("Staircase", Shape::Staircase).param(0.25),
        Preset::new("Trapezoid", Shape::Trapezoid).param(1.0 / 3.0),
        Preset::new("Triangle", Shape::Triangle),
        Preset::new("Triangular Pulse", Shape::TriangularPulse).param(0.5),
    ]
}

/// Finds a built-in preset by name (case-insensitive).
pub fn find_builtin(name: &str) -> Option<Preset> {
    builtin_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
