use marketfuse_core::config::RentCurveConfig;
use marketfuse_core::models::Provenance;
use marketfuse_rentcurve::{RentCurveEnforcer, RentCurveInput};
use proptest::prelude::*;

fn arb_rent() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(300.0f64..8_000.0)
}

proptest! {
    #[test]
    fn output_is_strictly_increasing_by_min_step(
        studio in arb_rent(),
        one in arb_rent(),
        two in arb_rent(),
        three in arb_rent(),
        step in 25.0f64..200.0,
    ) {
        let config = RentCurveConfig { min_step: step, ..RentCurveConfig::default() };
        let input = RentCurveInput::new(studio, one, two, three);
        let report = RentCurveEnforcer::new(config).enforce(&input);

        let any_present = input.as_array().iter().any(Option::is_some);
        prop_assert_eq!(report.valid, any_present);

        if let Some(curve) = report.curve {
            let values = curve.values();
            for w in values.windows(2) {
                prop_assert!(w[1] - w[0] >= step - 1e-6, "{:?}", values);
            }
            for (point, raw) in curve.points.iter().zip(input.as_array()) {
                match raw {
                    None => prop_assert_eq!(point.provenance, Provenance::Imputed),
                    Some(v) if point.provenance == Provenance::Original => {
                        prop_assert_eq!(point.median_rent, v)
                    }
                    Some(v) => prop_assert!((point.correction_delta - (point.median_rent - v).abs()).abs() < 1e-9),
                }
            }
            prop_assert!((0.0..=1.0).contains(&curve.metrics.correction_rate));
        }
    }

    #[test]
    fn low_reported_rents_never_yield_non_positive_curves(
        seed in 200.0f64..300.0,
        class in 0usize..4,
        step in 25.0f64..200.0,
    ) {
        let mut values = [None; 4];
        values[class] = Some(seed);
        let input = RentCurveInput::new(values[0], values[1], values[2], values[3]);
        let config = RentCurveConfig { min_step: step, ..RentCurveConfig::default() };
        let curve = RentCurveEnforcer::new(config.clone()).enforce(&input).into_result().unwrap();

        let out = curve.values();
        prop_assert!(out.iter().all(|v| *v >= config.min_rent), "{:?}", out);
        for w in out.windows(2) {
            prop_assert!(w[1] - w[0] >= step - 1e-6, "{:?}", out);
        }
    }

    #[test]
    fn inverted_inputs_are_repaired(base in 1_000.0f64..5_000.0, drop in 1.0f64..300.0) {
        let input = RentCurveInput::new(
            Some(base),
            Some(base - drop),
            Some(base - 2.0 * drop),
            Some(base - 3.0 * drop),
        );
        let curve = RentCurveEnforcer::default().enforce(&input).into_result().unwrap();
        let values = curve.values();
        prop_assert_eq!(values[0], base);
        for w in values.windows(2) {
            prop_assert!(w[1] - w[0] >= 75.0 - 1e-6);
        }
    }
}
