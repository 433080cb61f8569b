//! Sine, square, pulse, sawtooth, and triangle series.

use std::f64::consts::{FRAC_2_PI, PI, TAU};

/// Pure fundamental.
pub fn sine(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    if k == 1 {
        (TAU * t).sin()
    } else {
        0.0
    }
}

/// Ideal square wave: odd harmonics, `4 / (pi k)`.
pub fn square(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    if k & 1 == 0 {
        return 0.0;
    }
    let k = k as f64;
    2.0 * FRAC_2_PI * (TAU * k * t).sin() / k
}

/// Rectangular pulse, high for the first `duty` of the cycle.
///
/// DC is `2 duty - 1`; harmonic `k` has amplitude `4 sin(pi k duty) / (pi k)`
/// around the pulse centre.
pub fn pulse(t: f64, k: u32, _limit: u32, duty: f64) -> f64 {
    if k == 0 {
        return 2.0 * duty - 1.0;
    }
    let k = k as f64;
    2.0 * FRAC_2_PI * (PI * k * duty).sin() * (TAU * k * (t - 0.5 * duty)).cos() / k
}

/// Falling ramp: all harmonics, `-2 / (pi k)`.
pub fn sawtooth(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let k = k as f64;
    -FRAC_2_PI * (TAU * k * t).sin() / k
}

/// Ideal triangle: odd harmonics, `8 / (pi k)^2`, sign alternating every
/// other odd harmonic.
pub fn triangle(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    if k & 1 == 0 {
        return 0.0;
    }
    let sign = if k & 2 == 0 { 1.0 } else { -1.0 };
    let k = k as f64;
    sign * 8.0 / (PI * PI) * (TAU * k * t).sin() / (k * k)
}
