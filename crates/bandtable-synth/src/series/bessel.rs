//! Shapes whose spectra are Bessel functions of the first kind.

use std::f64::consts::{PI, TAU};

/// Semicircle wave: odd harmonics, `4 J1(pi (2k - 1)) / k`.
pub fn circle(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    if k & 1 == 0 {
        return 0.0;
    }
    let kf = k as f64;
    4.0 * libm::j1(PI * (2.0 * kf - 1.0)) * (TAU * kf * t).sin() / kf
}

/// Cycloid arches with cusps at whole cycles, spanning `[-1, 1]`.
///
/// Harmonic `k` is `-(J[k-1](k) - J[k+1](k)) / k`, a cosine series; the
/// mean height of the arch gives the DC term.
pub fn cycloid(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    if k == 0 {
        return 0.5;
    }
    let n = k as i32;
    let x = k as f64;
    let a = libm::jn(n - 1, x) - libm::jn(n + 1, x);
    -a / x * (TAU * x * t).cos()
}
