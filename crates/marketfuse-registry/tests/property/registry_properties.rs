use marketfuse_core::models::{CanonicalMetricKey, MetricValue};
use marketfuse_registry::{Registry, ValueShape};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = CanonicalMetricKey> {
    prop::sample::select(CanonicalMetricKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn in_bounds_values_validate(key in arb_key(), t in 0.0f64..=1.0, u in 0.0f64..=1.0) {
        let registry = Registry::new();
        let spec = *registry.spec(key).unwrap();
        let a = (spec.min + t * (spec.max - spec.min)).clamp(spec.min, spec.max);
        let value = match spec.shape {
            ValueShape::Point => MetricValue::point(a),
            ValueShape::Range => {
                let b = (spec.min + u * (spec.max - spec.min)).clamp(spec.min, spec.max);
                prop_assume!(a != b);
                MetricValue::range(a.min(b), a.max(b))
            }
        };
        prop_assert!(registry.validate(key, &value), "{key}: {value:?} rejected");
    }

    #[test]
    fn out_of_bounds_values_fail(key in arb_key(), excess in 0.001f64..1_000_000.0, below in any::<bool>()) {
        let registry = Registry::new();
        let spec = *registry.spec(key).unwrap();
        let bad = if below { spec.min - excess } else { spec.max + excess };
        let value = match spec.shape {
            ValueShape::Point => MetricValue::point(bad),
            ValueShape::Range if below => MetricValue::range(bad, spec.max),
            ValueShape::Range => MetricValue::range(spec.min, bad),
        };
        prop_assert!(!registry.validate(key, &value));
    }

    #[test]
    fn normalize_rate_is_idempotent(key in arb_key(), v in 0.0f64..=100.0) {
        let registry = Registry::new();
        let once = registry.normalize_rate(key, v);
        let twice = registry.normalize_rate(key, once);
        prop_assert_eq!(once, twice);
    }
}
