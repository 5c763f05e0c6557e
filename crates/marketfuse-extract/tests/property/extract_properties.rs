use chrono::Utc;
use marketfuse_core::config::ExtractionConfig;
use marketfuse_core::models::{CanonicalMetricKey, Geography};
use marketfuse_extract::{parse_monetary_value, FindingExtractor, RawFinding};
use marketfuse_registry::Registry;
use proptest::prelude::*;

proptest! {
    #[test]
    fn single_amount_sigma_is_fraction_of_value(n in 1u32..10_000_000) {
        let cfg = ExtractionConfig::default();
        let parsed = parse_monetary_value(&format!("reported ${n}"), &cfg).unwrap();
        prop_assert_eq!(parsed.value, n as f64);
        prop_assert!((parsed.sigma - n as f64 * cfg.point_sigma_fraction).abs() < 1e-6);
    }

    #[test]
    fn two_amounts_sigma_is_scaled_width(a in 1u32..1_000_000, b in 1u32..1_000_000) {
        let cfg = ExtractionConfig::default();
        let parsed = parse_monetary_value(&format!("${a} - ${b}"), &cfg).unwrap();
        let (lo, hi) = (a.min(b) as f64, a.max(b) as f64);
        prop_assert_eq!(parsed.range, Some((lo, hi)));
        prop_assert!((parsed.value - (lo + hi) / 2.0).abs() < 1e-9);
        prop_assert!((parsed.sigma - (hi - lo) / cfg.range_sigma_divisor).abs() < 1e-9);
    }

    #[test]
    fn extracted_observations_always_validate(
        key in prop::sample::select(CanonicalMetricKey::ALL.to_vec()),
        answer in "[ $0-9.,%a-z/-]{0,40}",
    ) {
        let registry = Registry::new();
        let extractor = FindingExtractor::new(registry.clone(), ExtractionConfig::default());
        let finding = RawFinding::new(key.name(), Geography::zip("78701"), answer, "fuzz");
        for obs in extractor.extract(&[finding], Utc::now()) {
            prop_assert!(registry.validate(obs.metric, &obs.value));
        }
    }
}
