use chrono::{Duration, Utc};
use marketfuse_core::config::ReconcileConfig;
use marketfuse_core::models::{CanonicalMetricKey, ConfidenceTier, Geography, MetricValue, Observation};
use marketfuse_reconcile::{ReconciliationContext, Reconciler};
use marketfuse_registry::Registry;
use proptest::prelude::*;

fn arb_tier() -> impl Strategy<Value = ConfidenceTier> {
    prop::sample::select(ConfidenceTier::ALL.to_vec())
}

proptest! {
    #[test]
    fn fused_value_stays_within_inputs(
        inputs in prop::collection::vec((500.0f64..10_000.0, arb_tier(), 0i64..2_000), 1..8)
    ) {
        let now = Utc::now();
        let obs: Vec<Observation> = inputs
            .iter()
            .enumerate()
            .map(|(i, (v, tier, age))| Observation::new(
                CanonicalMetricKey::OneBedroomMedianRent,
                Geography::city("boise"),
                MetricValue::point(*v),
                format!("s{i}"),
                *tier,
                now - Duration::days(*age),
            ))
            .collect();

        let reconciler = Reconciler::new(Registry::new(), ReconcileConfig::default());
        let result = reconciler.reconcile(&obs, &ReconciliationContext::default(), now).unwrap();

        let lo = inputs.iter().map(|i| i.0).fold(f64::INFINITY, f64::min);
        let hi = inputs.iter().map(|i| i.0).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(result.value >= lo - 1e-6 && result.value <= hi + 1e-6);
        prop_assert!(result.band_low <= result.value && result.value <= result.band_high);

        if result.tier == ConfidenceTier::High {
            prop_assert!(inputs.iter().any(|i| i.1 == ConfidenceTier::High));
            prop_assert!(inputs.len() >= 2);
        }
        if result.requires_review {
            prop_assert_eq!(result.tier, ConfidenceTier::Low);
        }
    }
}
