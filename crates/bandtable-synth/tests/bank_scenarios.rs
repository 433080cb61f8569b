//! Bank-level behavior of catalog shapes.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use bandtable_spec::{BankLayout, Preset, Shape};
use bandtable_synth::bank::render_band;
use bandtable_synth::{generate, synthesize, BankOptions, Waveform, WavetableBank};
use pretty_assertions::assert_eq;

fn layout_256() -> BankLayout {
    BankLayout::with_bands(8).band_len(256)
}

fn bank(shape: Shape, layout: &BankLayout) -> WavetableBank {
    generate(&Preset::new(shape.name(), shape), layout).unwrap()
}

fn mean(band: &[f64]) -> f64 {
    band.iter().sum::<f64>() / band.len() as f64
}

fn rms_diff(a: &[f64], b: &[f64]) -> f64 {
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    (sum / a.len() as f64).sqrt()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_sine_quarter_cycle_peak() {
    let bank = bank(Shape::Sine, &layout_256());
    assert_eq!(bank.len(), 8 * 256);
    let band0 = bank.band(0).unwrap();
    assert!((band0[64] - FRAC_1_SQRT_2).abs() < 1e-15);
    assert!(band0[0].abs() < 1e-15);
    assert!((band0[192] + FRAC_1_SQRT_2).abs() < 1e-15);
}

#[test]
fn test_sine_bands_are_identical() {
    let bank = bank(Shape::Sine, &layout_256());
    let first = bank.band(0).unwrap();
    for band in bank.bands() {
        assert_eq!(band, first);
    }
}

#[test]
fn test_square_zero_mean_and_odd_symmetry() {
    let bank = bank(Shape::Square, &layout_256());
    for band in bank.bands() {
        assert!(mean(band).abs() < 1e-12);
        for j in 1..256 {
            assert!((band[j] + band[256 - j]).abs() < 1e-10, "j={}", j);
        }
    }
}

#[test]
fn test_pulse_mean_with_unit_gain() {
    let layout = layout_256().gain(1.0);
    let bank = bank(Shape::Pulse, &layout);
    for band in bank.bands() {
        assert!((mean(band) + 0.4).abs() < 1e-12, "mean={}", mean(band));
    }
}

// ============================================================================
// Structural properties
// ============================================================================

#[test]
fn test_odd_about_cycle_start() {
    for shape in [Shape::Triangle, Shape::Trapezoid, Shape::Sawtooth] {
        let bank = bank(shape, &layout_256());
        for band in bank.bands() {
            for j in 1..256 {
                assert!(
                    (band[j] + band[256 - j]).abs() < 1e-10,
                    "{} j={}",
                    shape,
                    j
                );
            }
        }
    }
}

#[test]
fn test_half_wave_antisymmetry() {
    let layout = layout_256();
    let half = layout.band_len / 2;
    for shape in [
        Shape::Triangle,
        Shape::Trapezoid,
        Shape::Square,
        Shape::ModifiedSquare,
        Shape::FilteredSquare,
        Shape::Circle,
    ] {
        let bank = bank(shape, &layout);
        for (i, band) in bank.bands().enumerate() {
            for j in 0..layout.band_len {
                let opposite = band[(j + half) % layout.band_len];
                assert!(
                    (band[j] + opposite).abs() < 1e-10,
                    "{} band={} j={}",
                    shape,
                    i,
                    j
                );
            }
        }
    }
}

#[test]
fn test_sawtooth_is_not_half_wave_antisymmetric() {
    let layout = layout_256();
    let bank = bank(Shape::Sawtooth, &layout);
    let band = bank.band(7).unwrap();
    let worst = (0..layout.band_len)
        .map(|j| (band[j] + band[(j + 128) % 256]).abs())
        .fold(0.0, f64::max);
    assert!(worst > 0.1, "worst={}", worst);
}

#[test]
fn test_band_mean_is_gain_times_dc() {
    let layout = layout_256();
    let cases = [
        (Shape::FullRectifiedSine, 4.0 / PI - 1.0),
        (Shape::HalfRectifiedSine, 2.0 / PI - 1.0),
        (Shape::TriangularPulse, -0.5),
        (Shape::Staircase, 0.0),
        (Shape::Cycloid, 0.5),
        (Shape::Triangle, 0.0),
    ];
    for (shape, dc) in cases {
        let bank = bank(shape, &layout);
        for band in bank.bands() {
            let expected = layout.gain * dc;
            assert!(
                (mean(band) - expected).abs() < 1e-12,
                "{}: {} != {}",
                shape,
                mean(band),
                expected
            );
        }
    }
}

#[test]
fn test_smooth_shapes_converge() {
    let layout = layout_256().gain(1.0);
    let ideal_triangle = |t: f64| {
        if t < 0.75 {
            1.0 - 4.0 * (t - 0.25).abs()
        } else {
            4.0 * t - 4.0
        }
    };
    let ideal_rectified = |t: f64| 2.0 * (PI * t).sin().abs() - 1.0;
    let cases: [(Shape, &dyn Fn(f64) -> f64); 2] = [
        (Shape::Triangle, &ideal_triangle),
        (Shape::FullRectifiedSine, &ideal_rectified),
    ];

    for (shape, ideal) in cases {
        let bank = bank(shape, &layout);
        let bands: Vec<&[f64]> = bank.bands().collect();
        let steps: Vec<f64> = bands.windows(2).map(|w| rms_diff(w[0], w[1])).collect();
        for pair in steps.windows(2) {
            assert!(pair[1] < pair[0], "{}: {:?}", shape, steps);
        }

        let target: Vec<f64> = (0..256).map(|j| ideal(j as f64 / 256.0)).collect();
        let error = rms_diff(bands[7], &target);
        assert!(error < 2e-3, "{}: top band error {}", shape, error);
    }
}

#[test]
fn test_smoothing_suppresses_overshoot() {
    let layout = layout_256().gain(1.0);
    let square = Waveform::new(Shape::Square, None).unwrap();
    let peak = |smoothing: bool| {
        let options = BankOptions {
            phase: 0.0,
            smoothing,
        };
        let bank = synthesize(&square, &options, &layout).unwrap();
        bank.band(7).unwrap().iter().fold(0.0f64, |m, s| m.max(s.abs()))
    };
    assert!(peak(false) > 1.08);
    assert!(peak(true) < 1.02);
}

#[test]
fn test_parallel_matches_sequential() {
    let layout = layout_256();
    let waveform = Waveform::new(Shape::Hammond, Some(9.0)).unwrap();
    let options = BankOptions::default();
    let bank = synthesize(&waveform, &options, &layout).unwrap();

    let mut sequential = vec![0.0; layout.total_samples()];
    for (i, band) in sequential.chunks_mut(layout.band_len).enumerate() {
        render_band(&waveform, &options, &layout, layout.harmonic_limit(i), band);
    }
    assert_eq!(bank.samples(), sequential.as_slice());
}

#[test]
fn test_default_layout_bank() {
    let bank = bank(Shape::Sawtooth, &BankLayout::default());
    assert_eq!(bank.layout().band_len, 512);
    assert_eq!(bank.len(), 8 * 512);
}
