//! Property-based tests over the shape parameter domains.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bandtable-synth --test proptest_series
//! ```

use bandtable_spec::{BankLayout, Domain, Shape};
use bandtable_synth::{synthesize, BankOptions, Waveform};
use proptest::prelude::*;

/// Parameters drawn from the shape's accepted domain.
fn param_in_domain(shape: Shape) -> BoxedStrategy<Option<f64>> {
    match shape.param().map(|p| p.domain) {
        None => Just(None).boxed(),
        Some(Domain::Open(min, max)) => (min + 1e-9..max - 1e-9).prop_map(Some).boxed(),
        Some(Domain::Closed(min, max)) => (min..=max).prop_map(Some).boxed(),
        Some(Domain::Positive) => (1e-3..1e3).prop_map(Some).boxed(),
        Some(Domain::Count(min, max)) => (min..=max).prop_map(|n| Some(f64::from(n))).boxed(),
    }
}

fn shape_and_param() -> impl Strategy<Value = (Shape, Option<f64>)> {
    prop::sample::select(Shape::ALL.to_vec())
        .prop_flat_map(|shape| (Just(shape), param_in_domain(shape)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every sample of every shape is finite across its parameter domain.
    #[test]
    fn samples_are_finite(
        (shape, param) in shape_and_param(),
        phase in -4.0f64..4.0,
        smoothing in any::<bool>(),
    ) {
        let waveform = Waveform::new(shape, param).unwrap();
        let layout = BankLayout::with_bands(6).band_len(64);
        let bank = synthesize(&waveform, &BankOptions { phase, smoothing }, &layout).unwrap();
        prop_assert!(
            bank.samples().iter().all(|s| s.is_finite()),
            "{} param={:?}", shape, param
        );
    }

    /// Odd-only shapes never contribute at even harmonics.
    #[test]
    fn odd_only_shapes_skip_even_harmonics(
        t in 0.0f64..1.0,
        half in 1u32..64,
        ratio in 0.0f64..=1.0,
    ) {
        use bandtable_synth::FourierSeries;

        for shape in [Shape::Square, Shape::Triangle, Shape::Trapezoid, Shape::ModifiedSquare] {
            let param = shape.param().map(|_| ratio);
            let waveform = Waveform::new(shape, param).unwrap();
            prop_assert_eq!(waveform.term(t, 2 * half, 128), 0.0);
        }
    }

    /// Out-of-domain parameters are rejected before synthesis.
    #[test]
    fn out_of_domain_pulse_rejected(duty in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0]) {
        prop_assert!(Waveform::new(Shape::Pulse, Some(duty)).is_err());
    }
}
