use marketfuse_units::{
    detect_units, DetectionConfidence, InferenceSource, PropertyRecord, MAX_ESTIMATED_UNITS,
    MIN_MULTI_FAMILY_UNITS,
};
use proptest::prelude::*;

fn arb_property() -> impl Strategy<Value = PropertyRecord> {
    (
        proptest::option::of("[ -~]{0,40}"),
        proptest::option::of("[ -~]{0,120}"),
        proptest::option::of(0u32..40),
        proptest::option::of(0.0f64..20.0),
    )
        .prop_map(|(style, description, bedrooms, bathrooms)| PropertyRecord {
            style,
            description,
            bedrooms,
            bathrooms,
        })
}

proptest! {
    #[test]
    fn never_zero_units(p in arb_property()) {
        let r = detect_units(&p);
        prop_assert!(r.units >= 1);
        let uncertain = matches!(r.confidence, DetectionConfidence::Low | DetectionConfidence::Unknown);
        prop_assert_eq!(r.needs_research, uncertain);
    }

    #[test]
    fn family_style_is_exact(n in 2u32..=9, beds in proptest::option::of(0u32..40), baths in proptest::option::of(0.0f64..20.0)) {
        let p = PropertyRecord {
            style: Some(format!("{n} Family")),
            description: None,
            bedrooms: beds,
            bathrooms: baths,
        };
        let r = detect_units(&p);
        prop_assert_eq!(r.units, n);
        prop_assert_eq!(r.confidence, DetectionConfidence::High);
    }

    #[test]
    fn room_estimates_stay_in_bounds(beds in 0u32..200, baths in proptest::option::of(0.0f64..50.0)) {
        let p = PropertyRecord {
            style: Some("Multi Family".to_string()),
            description: None,
            bedrooms: Some(beds),
            bathrooms: baths,
        };
        let r = detect_units(&p);
        prop_assert!(matches!(r.source, InferenceSource::BedroomHeuristic | InferenceSource::MultiFamilyDefault));
        prop_assert!((MIN_MULTI_FAMILY_UNITS..=MAX_ESTIMATED_UNITS).contains(&r.units));
        prop_assert_eq!(r.confidence, DetectionConfidence::Low);
    }
}
