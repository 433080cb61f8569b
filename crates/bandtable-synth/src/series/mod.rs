//! Spectral waveform functions.
//!
//! Each shape is a closed-form Fourier series. A series function maps
//! `(t, k, limit, param)` to the contribution of harmonic `k` at phase `t`:
//!
//! - `k == 0` returns the DC term, independent of `limit`
//! - `k >= 1` returns the harmonic's amplitude-weighted value, without the
//!   smoothing window (the bank synthesizer applies it)
//!
//! Modules:
//! - `basic` - Sine, square, pulse, sawtooth, triangle
//! - `variants` - Modified, rectified, trapezoid, staircase, and filtered shapes
//! - `organ` - Combo organ stops and Hammond drawbars
//! - `bessel` - Circle and cycloid

pub mod basic;
pub mod bessel;
pub mod organ;
pub mod variants;


use std::f64::consts::PI;

use bandtable_spec::{ResolvedPreset, Shape, SpecResult};

/// Signature shared by every catalog function: `(t, k, limit, param)`.
pub type SeriesFn = fn(f64, u32, u32, f64) -> f64;

/// A Fourier series the bank synthesizer can evaluate.
pub trait FourierSeries: Sync {
    /// Returns harmonic `k`'s contribution at phase `t` in a band limited to
    /// `limit` harmonics. `k == 0` is the DC term.
    fn term(&self, t: f64, k: u32, limit: u32) -> f64;
}

/// `sin(x) / x`, with `sinc(0) == 1`.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Sinc (Lanczos) smoothing weight for harmonic `k` under `limit`.
///
/// The weight reaches zero one harmonic past the limit, tapering the top of
/// each band instead of truncating it.
#[inline]
pub fn smoothing_weight(k: u32, limit: u32) -> f64 {
    sinc(PI * k as f64 / (limit as f64 + 1.0))
}

/// Returns the catalog function for `shape`.
pub fn series_fn(shape: Shape) -> SeriesFn {
    match shape {
        Shape::Sine => basic::sine,
        Shape::Square => basic::square,
        Shape::Pulse => basic::pulse,
        Shape::Sawtooth => basic::sawtooth,
        Shape::Triangle => basic::triangle,
        Shape::ModifiedTriangle => variants::modified_triangle,
        Shape::ModifiedSquare => variants::modified_square,
        Shape::FullRectifiedSine => variants::full_rectified_sine,
        Shape::HalfRectifiedSine => variants::half_rectified_sine,
        Shape::Trapezoid => variants::trapezoid,
        Shape::TriangularPulse => variants::triangular_pulse,
        Shape::Staircase => variants::staircase,
        Shape::FilteredSquare => variants::filtered_square,
        Shape::ComboOrgan => organ::combo_organ,
        Shape::Hammond => organ::hammond,
        Shape::Circle => bessel::circle,
        Shape::Cycloid => bessel::cycloid,
    }
}

/// A catalog shape bound to a validated parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waveform {
    shape: Shape,
    param: f64,
}

impl Waveform {
    /// Binds `shape` to `param`, falling back to the shape's named default.
    pub fn new(shape: Shape, param: Option<f64>) -> SpecResult<Self> {
        let param = shape.resolve_param(param)?;
        Ok(Self { shape, param })
    }

    /// Binds a resolved preset's shape and parameter.
    pub fn from_preset(preset: &ResolvedPreset) -> Self {
        Self {
            shape: preset.shape,
            param: preset.param,
        }
    }

    /// Returns the shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the bound parameter.
    pub fn param(&self) -> f64 {
        self.param
    }
}

impl FourierSeries for Waveform {
    #[inline]
    fn term(&self, t: f64, k: u32, limit: u32) -> f64 {
        series_fn(self.shape)(t, k, limit, self.param)
    }
}

/// Adapts a closure `(t, k, limit) -> f64` into a [`FourierSeries`].
///
/// This is how shapes outside the catalog are supplied.
#[derive(Debug, Clone, Copy)]
pub struct FnSeries<F>(pub F);

impl<F> FourierSeries for FnSeries<F>
where
    F: Fn(f64, u32, u32) -> f64 + Sync,
{
    #[inline]
    fn term(&self, t: f64, k: u32, limit: u32) -> f64 {
        (self.0)(t, k, limit)
    }
}
