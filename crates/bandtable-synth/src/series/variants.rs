//! Modified, rectified, trapezoid, staircase, and filtered shapes.
//!
//! Parameterized shapes whose textbook coefficients divide by a
//! parameter-dependent quantity are written in `sinc` form instead, so the
//! degenerate parameter values evaluate to their analytic limits.

use std::f64::consts::{FRAC_2_PI, PI, TAU};

use super::sinc;

/// Asymmetric triangle rising for `ratio` of the cycle.
///
/// Equivalent to `-2 m^2 sin(pi (1 - ratio) k) / (pi^2 (m - 1) k^2)` with
/// `m = 1 / ratio`, evaluated from whichever end keeps the divisor away from
/// zero. `ratio = 1` gives a ramp.
pub fn modified_triangle(t: f64, k: u32, _limit: u32, ratio: f64) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let kf = k as f64;
    let shape = (TAU * kf * (t + 0.5)).sin() / kf;
    if ratio >= 0.5 {
        -FRAC_2_PI / ratio * sinc(PI * kf * (1.0 - ratio)) * shape
    } else {
        let sign = if k & 1 == 1 { 1.0 } else { -1.0 };
        -FRAC_2_PI / (1.0 - ratio) * sign * sinc(PI * kf * ratio) * shape
    }
}

/// Square with its edges moved by `offset`: odd harmonics weighted by
/// `cos(pi k (1/2 - offset))`.
pub fn modified_square(t: f64, k: u32, _limit: u32, offset: f64) -> f64 {
    if k & 1 == 0 {
        return 0.0;
    }
    let k = k as f64;
    2.0 * FRAC_2_PI
        * (PI * k * (0.5 - offset)).cos()
        * (TAU * k * (t + 0.5 * offset + 0.75)).sin()
        / k
}

/// Full-wave rectified sine, `2 |sin(pi t)| - 1`.
pub fn full_rectified_sine(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    if k == 0 {
        return 2.0 * FRAC_2_PI - 1.0;
    }
    let k = k as f64;
    -4.0 * FRAC_2_PI * (TAU * k * t).cos() / (4.0 * k * k - 1.0)
}

/// Half-wave rectified sine, `2 max(sin(2 pi t), 0) - 1`.
pub fn half_rectified_sine(t: f64, k: u32, _limit: u32, _param: f64) -> f64 {
    match k {
        0 => FRAC_2_PI - 1.0,
        1 => (TAU * t).sin(),
        k if k & 1 == 1 => 0.0,
        k => {
            let k = k as f64;
            -2.0 * FRAC_2_PI * (TAU * k * t).cos() / (k * k - 1.0)
        }
    }
}

/// Trapezoid: odd harmonics, `4 sinc(pi k (1/2 - rise)) / (pi k)`.
///
/// `rise = 0` is a triangle, `rise = 1/2` a square.
pub fn trapezoid(t: f64, k: u32, _limit: u32, rise: f64) -> f64 {
    if k & 1 == 0 {
        return 0.0;
    }
    let k = k as f64;
    2.0 * FRAC_2_PI * sinc(PI * k * (0.5 - rise)) * (TAU * k * t).sin() / k
}

/// Triangular pulse of base `width` centred at `width / 2`.
pub fn triangular_pulse(t: f64, k: u32, _limit: u32, width: f64) -> f64 {
    if k == 0 {
        return width - 1.0;
    }
    let k = k as f64;
    let s = sinc(0.5 * PI * k * width);
    2.0 * width * s * s * (TAU * k * (t - 0.5 * width)).cos()
}

/// Three-level staircase.
///
/// Odd harmonics carry the square component; even harmonic `2j` carries the
/// step of width `step` at twice the fundamental.
pub fn staircase(t: f64, k: u32, _limit: u32, step: f64) -> f64 {
    const SCALE: f64 = 2.0 / 3.0 * 2.0 * FRAC_2_PI;
    if k == 0 {
        return (4.0 * step - 1.0) / 3.0;
    }
    if k & 1 == 1 {
        let k = k as f64;
        return SCALE * (TAU * k * t).sin() / k;
    }
    let j = (k / 2) as f64;
    SCALE * 0.5 * (TAU * j * step).sin() * (TAU * j * (2.0 * t - step)).cos() / j
}

/// Square through a one-pole low-pass with `cutoff` in harmonic units.
pub fn filtered_square(t: f64, k: u32, _limit: u32, cutoff: f64) -> f64 {
    if k & 1 == 0 {
        return 0.0;
    }
    let k = k as f64;
    let x = k / cutoff;
    let gain = 1.0 / x.hypot(1.0);
    let phase_shift = -x.atan();
    2.0 * FRAC_2_PI * gain * (TAU * k * t + phase_shift).sin() / k
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::basic::{sawtooth, square, triangle};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_modified_triangle_branches_agree() {
        // Evaluate the textbook form directly away from the singular ends.
        for ratio in [0.2, 0.3, 0.49, 0.51, 0.8] {
            let m = 1.0 / ratio;
            for k in 1..=32u32 {
                let kf = k as f64;
                let t = 0.17;
                let textbook = -2.0 * m * m / (PI * PI) * (PI * (1.0 - ratio) * kf).sin()
                    * (TAU * kf * (t + 0.5)).sin()
                    / ((m - 1.0) * kf * kf);
                assert!(
                    close(modified_triangle(t, k, 32, ratio), textbook),
                    "ratio={} k={}",
                    ratio,
                    k
                );
            }
        }
    }

    #[test]
    fn test_modified_triangle_full_ratio_is_ramp() {
        for k in 1..=16 {
            let t = 0.31;
            let ramp = -FRAC_2_PI * (TAU * k as f64 * (t + 0.5)).sin() / k as f64;
            assert!(close(modified_triangle(t, k, 16, 1.0), ramp));
            assert!(modified_triangle(t, k, 16, 0.0).is_finite());
        }
    }

    #[test]
    fn test_trapezoid_limits() {
        for k in 1..=15 {
            for t in [0.05, 0.4, 0.9] {
                assert!(close(trapezoid(t, k, 16, 0.0), triangle(t, k, 16, 0.0)));
                assert!(close(trapezoid(t, k, 16, 0.5), square(t, k, 16, 0.0)));
            }
        }
    }

    #[test]
    fn test_trapezoid_matches_two_edge_form() {
        let rise = 1.0 / 3.0;
        for k in (1..=31u32).step_by(2) {
            let kf = k as f64;
            let t = 0.23;
            let mut s = 0.25 / (0.5 - rise) * 8.0 / (PI * PI)
                * ((TAU * kf * (t - 0.5 * rise)).sin() + (TAU * kf * (t + 0.5 * rise)).sin())
                / (kf * kf);
            if k & 2 != 0 {
                s = -s;
            }
            assert!(close(trapezoid(t, k, 32, rise), s), "k={}", k);
        }
    }

    #[test]
    fn test_rectified_dc() {
        assert!(close(full_rectified_sine(0.0, 0, 1, 0.0), 4.0 / PI - 1.0));
        assert!(close(half_rectified_sine(0.0, 0, 1, 0.0), 2.0 / PI - 1.0));
        assert_eq!(half_rectified_sine(0.3, 3, 8, 0.0), 0.0);
    }

    #[test]
    fn test_triangular_pulse_zero_width_is_floor() {
        assert_eq!(triangular_pulse(0.4, 0, 8, 0.0), -1.0);
        assert_eq!(triangular_pulse(0.4, 5, 8, 0.0), 0.0);
    }

    #[test]
    fn test_staircase_even_harmonics_use_step() {
        // A zero-width step contributes nothing at even harmonics.
        for k in [2, 4, 8] {
            assert!(staircase(0.3, k, 8, 0.0).abs() < 1e-15);
        }
        assert!(close(
            staircase(0.1, 3, 8, 0.25),
            2.0 / 3.0 * square(0.1, 3, 8, 0.0)
        ));
    }

    #[test]
    fn test_filtered_square_approaches_square_for_high_cutoff() {
        for k in [1, 3, 5] {
            let a = filtered_square(0.2, k, 8, 1e9);
            assert!((a - square(0.2, k, 8, 0.0)).abs() < 1e-6);
        }
        assert!(filtered_square(0.2, 3, 8, 1.0).abs() < square(0.2, 3, 8, 0.0).abs() + 1e-12);
    }

    #[test]
    fn test_ramps_agree() {
        // The sawtooth is the modified triangle at full ratio, shifted half a cycle.
        for k in 1..=8 {
            let t = 0.12;
            assert!(close(
                modified_triangle(t, k, 8, 1.0),
                sawtooth((t + 0.5) % 1.0, k, 8, 0.0)
            ));
        }
    }
}
