//! Waveform shape identifiers and their parameter domains.
//!
//! Every shape has at most one real-valued parameter. Shapes that take one
//! carry an explicit named default here, so "unspecified" never depends on a
//! function signature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Default duty cycle for [`Shape::Pulse`].
pub const DEFAULT_PULSE_DUTY: f64 = 0.3;
/// Default rise/fall ratio for [`Shape::ModifiedTriangle`].
pub const DEFAULT_TRIANGLE_RATIO: f64 = 0.3;
/// Default phase offset for [`Shape::ModifiedSquare`].
pub const DEFAULT_SQUARE_OFFSET: f64 = 0.25;
/// Default rise fraction for [`Shape::Trapezoid`].
pub const DEFAULT_TRAPEZOID_RISE: f64 = 1.0 / 3.0;
/// Default width for [`Shape::TriangularPulse`].
pub const DEFAULT_TRIANGULAR_PULSE_WIDTH: f64 = 0.5;
/// Default step width for [`Shape::Staircase`].
pub const DEFAULT_STAIRCASE_STEP: f64 = 0.25;
/// Default one-pole cutoff, in harmonics, for [`Shape::FilteredSquare`].
pub const DEFAULT_FILTER_CUTOFF: f64 = std::f64::consts::SQRT_2;
/// Default number of octave stops for [`Shape::ComboOrgan`].
pub const DEFAULT_COMBO_STOPS: u32 = 3;
/// Default number of drawbars for [`Shape::Hammond`].
pub const DEFAULT_DRAWBARS: u32 = 9;

/// Smallest accepted stop/drawbar count.
pub const MIN_ORGAN_COUNT: u32 = 1;
/// Largest accepted stop/drawbar count.
pub const MAX_ORGAN_COUNT: u32 = 9;

/// Enumerated waveform catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Pure fundamental.
    Sine,
    /// Ideal square wave.
    Square,
    /// Rectangular pulse with variable duty cycle.
    Pulse,
    /// Ideal ramp.
    Sawtooth,
    /// Ideal triangle.
    Triangle,
    /// Asymmetric triangle with variable rise/fall ratio.
    ModifiedTriangle,
    /// Square with a duty-like phase offset.
    ModifiedSquare,
    /// Full-wave rectified sine.
    FullRectifiedSine,
    /// Half-wave rectified sine.
    HalfRectifiedSine,
    /// Trapezoid with variable rise fraction.
    Trapezoid,
    /// Narrow triangular pulse.
    TriangularPulse,
    /// Three-level stepped wave.
    Staircase,
    /// Square through a one-pole low-pass filter.
    FilteredSquare,
    /// Additive octave stops.
    ComboOrgan,
    /// Additive drawbar organ.
    Hammond,
    /// Bessel-shaped spectrum (semicircle wave).
    Circle,
    /// Cycloid arch, cosine phase.
    Cycloid,
}

/// Domain of a shape parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// Open interval `(min, max)`.
    Open(f64, f64),
    /// Closed interval `[min, max]`.
    Closed(f64, f64),
    /// Any finite value greater than zero.
    Positive,
    /// Integer count in `min..=max`.
    Count(u32, u32),
}

impl Domain {
    /// Returns whether `value` lies in the domain.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match *self {
            Domain::Open(min, max) => value > min && value < max,
            Domain::Closed(min, max) => (min..=max).contains(&value),
            Domain::Positive => value > 0.0,
            Domain::Count(min, max) => {
                value.fract() == 0.0 && value >= min as f64 && value <= max as f64
            }
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Open(min, max) => write!(f, "({}, {})", min, max),
            Domain::Closed(min, max) => write!(f, "[{}, {}]", min, max),
            Domain::Positive => write!(f, "(0, inf)"),
            Domain::Count(min, max) => write!(f, "{}..={}", min, max),
        }
    }
}

/// Description of a shape's single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Parameter name, e.g. `"duty"`.
    pub name: &'static str,
    /// Named default used when a preset leaves the parameter out.
    pub default: f64,
    /// Accepted values.
    pub domain: Domain,
}

impl Shape {
    /// Every shape in catalog order.
    pub const ALL: [Shape; 17] = [
        Shape::Sine,
        Shape::Square,
        Shape::Pulse,
        Shape::Sawtooth,
        Shape::Triangle,
        Shape::ModifiedTriangle,
        Shape::ModifiedSquare,
        Shape::FullRectifiedSine,
        Shape::HalfRectifiedSine,
        Shape::Trapezoid,
        Shape::TriangularPulse,
        Shape::Staircase,
        Shape::FilteredSquare,
        Shape::ComboOrgan,
        Shape::Hammond,
        Shape::Circle,
        Shape::Cycloid,
    ];

    /// Returns the snake_case identifier used in manifests.
    pub fn id(&self) -> &'static str {
        match self {
            Shape::Sine => "sine",
            Shape::Square => "square",
            Shape::Pulse => "pulse",
            Shape::Sawtooth => "sawtooth",
            Shape::Triangle => "triangle",
            Shape::ModifiedTriangle => "modified_triangle",
            Shape::ModifiedSquare => "modified_square",
            Shape::FullRectifiedSine => "full_rectified_sine",
            Shape::HalfRectifiedSine => "half_rectified_sine",
            Shape::Trapezoid => "trapezoid",
            Shape::TriangularPulse => "triangular_pulse",
            Shape::Staircase => "staircase",
            Shape::FilteredSquare => "filtered_square",
            Shape::ComboOrgan => "combo_organ",
            Shape::Hammond => "hammond",
            Shape::Circle => "circle",
            Shape::Cycloid => "cycloid",
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sine => "Sine",
            Shape::Square => "Square",
            Shape::Pulse => "Pulse",
            Shape::Sawtooth => "Sawtooth",
            Shape::Triangle => "Triangle",
            Shape::ModifiedTriangle => "Modified Triangle",
            Shape::ModifiedSquare => "Modified Square",
            Shape::FullRectifiedSine => "Full-Wave Rectified Sine",
            Shape::HalfRectifiedSine => "Half-Wave Rectified Sine",
            Shape::Trapezoid => "Trapezoid",
            Shape::TriangularPulse => "Triangular Pulse",
            Shape::Staircase => "Staircase",
            Shape::FilteredSquare => "Filtered Square",
            Shape::ComboOrgan => "Combo Organ",
            Shape::Hammond => "Hammond",
            Shape::Circle => "Circle",
            Shape::Cycloid => "Cycloid",
        }
    }

    /// Returns the parameter description, or `None` for parameterless shapes.
    pub fn param(&self) -> Option<ParamSpec> {
        let spec = |name, default, domain| {
            Some(ParamSpec {
                name,
                default,
                domain,
            })
        };
        let organ = Domain::Count(MIN_ORGAN_COUNT, MAX_ORGAN_COUNT);
        match self {
            Shape::Pulse => spec("duty", DEFAULT_PULSE_DUTY, Domain::Open(0.0, 1.0)),
            Shape::ModifiedTriangle => {
                spec("ratio", DEFAULT_TRIANGLE_RATIO, Domain::Open(0.0, 1.0))
            }
            Shape::ModifiedSquare => {
                spec("offset", DEFAULT_SQUARE_OFFSET, Domain::Closed(0.0, 1.0))
            }
            Shape::Trapezoid => spec("rise", DEFAULT_TRAPEZOID_RISE, Domain::Closed(0.0, 1.0)),
            Shape::TriangularPulse => spec(
                "width",
                DEFAULT_TRIANGULAR_PULSE_WIDTH,
                Domain::Open(0.0, 1.0),
            ),
            Shape::Staircase => spec("step", DEFAULT_STAIRCASE_STEP, Domain::Closed(0.0, 1.0)),
            Shape::FilteredSquare => spec("cutoff", DEFAULT_FILTER_CUTOFF, Domain::Positive),
            Shape::ComboOrgan => spec("stops", DEFAULT_COMBO_STOPS as f64, organ),
            Shape::Hammond => spec("drawbars", DEFAULT_DRAWBARS as f64, organ),
            Shape::Sine
            | Shape::Square
            | Shape::Sawtooth
            | Shape::Triangle
            | Shape::FullRectifiedSine
            | Shape::HalfRectifiedSine
            | Shape::Circle
            | Shape::Cycloid => None,
        }
    }

    /// Returns whether the sinc window is applied when a preset does not say.
    ///
    /// A lone fundamental has nothing to ring against, so the sine keeps its
    /// full amplitude.
    pub fn default_smoothing(&self) -> bool {
        !matches!(self, Shape::Sine)
    }

    /// Resolves an optional preset parameter against this shape's domain.
    ///
    /// Parameterless shapes resolve to `0.0` and reject any supplied value.
    pub fn resolve_param(&self, value: Option<f64>) -> SpecResult<f64> {
        let Some(spec) = self.param() else {
            return match value {
                Some(value) => Err(SpecError::UnexpectedParam {
                    shape: *self,
                    value,
                }),
                None => Ok(0.0),
            };
        };

        let value = value.unwrap_or(spec.default);
        if spec.domain.contains(value) {
            return Ok(value);
        }

        Err(match spec.domain {
            Domain::Count(min, max) => SpecError::InvalidCount {
                shape: *self,
                name: spec.name,
                min,
                max,
                value,
            },
            domain => SpecError::ParamOutOfDomain {
                shape: *self,
                name: spec.name,
                domain: domain.to_string(),
                value,
            },
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .iter()
            .copied()
            .find(|shape| shape.id() == s || shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown shape: {}", s))
    }
}
