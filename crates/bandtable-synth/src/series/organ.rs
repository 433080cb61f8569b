//! Organ registrations.
//!
//! Both shapes take an integer count carried in the `f64` parameter slot.
//! Counts outside `1..=9` are rejected when presets are resolved; the series
//! functions themselves return silence for them.

use std::f64::consts::{FRAC_2_PI, TAU};

/// Per-harmonic level for each registration, indexed by `drawbars - 1`.
///
/// Every sounding harmonic of a registration shares the same level, scaled
/// down as more bars are pulled.
pub const DRAWBAR_GAIN: [f64; 9] = [
    1.0,
    0.568134086134179594473891938833,
    0.4,
    0.309382307569317671624986587631,
    0.268382163704272314053156378577,
    0.236287471015808936414259733283,
    0.208586523765622755544058009036,
    0.18534593451986317025337314135,
    0.172410339992880773385408588183,
];

fn count(param: f64) -> Option<u32> {
    let n = param.round();
    if (1.0..=9.0).contains(&n) {
        Some(n as u32)
    } else {
        None
    }
}

/// Combo organ with `stops` octave-spaced square stops.
///
/// Each odd harmonic of every stop lands on a harmonic whose trailing zero
/// count names the stop, so harmonic `k` is present when
/// `trailing_zeros(k) < stops` and is weighted by the stop's octave
/// multiplier, the lowest set bit of `k`.
pub fn combo_organ(t: f64, k: u32, _limit: u32, stops: f64) -> f64 {
    let Some(stops) = count(stops) else {
        return 0.0;
    };
    if k == 0 || k.trailing_zeros() >= stops {
        return 0.0;
    }
    let multiplier = f64::from(k & k.wrapping_neg());
    let k = k as f64;
    2.0 * FRAC_2_PI / stops as f64 * (TAU * k * t).sin() / k * multiplier
}

fn drawbar_sounds(k: u32, drawbars: u32) -> bool {
    match drawbars {
        1..=4 => k <= drawbars,
        5..=8 => k <= 4 || (k & 1 == 0 && k <= 4 + 2 * (drawbars - 4)),
        9 => k <= 4 || (k & 1 == 0 && k <= 12) || k == 16,
        _ => false,
    }
}

/// Hammond tonewheel registration with the first `drawbars` bars pulled.
pub fn hammond(t: f64, k: u32, _limit: u32, drawbars: f64) -> f64 {
    let Some(drawbars) = count(drawbars) else {
        return 0.0;
    };
    if k == 0 || !drawbar_sounds(k, drawbars) {
        return 0.0;
    }
    DRAWBAR_GAIN[drawbars as usize - 1] * (TAU * k as f64 * t).sin()
}
