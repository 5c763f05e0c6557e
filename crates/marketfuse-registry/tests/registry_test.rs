use std::collections::HashMap;

use marketfuse_core::config::ToleranceOverride;
use marketfuse_core::errors::RegistryError;
use marketfuse_core::models::{CanonicalMetricKey as K, MetricValue};
use marketfuse_registry::{Registry, UnitConvention, ValueShape};

#[test]
fn every_canonical_key_has_a_default_spec() {
    let registry = Registry::new();
    assert_eq!(registry.len(), K::ALL.len());
    for key in K::ALL {
        let spec = registry.spec(key).expect("spec present");
        assert!(spec.min < spec.max, "{key}: empty range");
        assert!(spec.tolerance.tolerance > 0.0);
        if let Some(critical) = spec.tolerance.critical {
            assert!(critical > spec.tolerance.tolerance, "{key}: critical below tolerance");
        }
    }
}

#[test]
fn rent_tolerance_is_tighter_than_price_tolerance() {
    let registry = Registry::new();
    let rent = registry.spec(K::TwoBedroomMedianRent).unwrap().tolerance;
    let price = registry.spec(K::MedianHomePrice).unwrap().tolerance;
    assert!(rent.tolerance < price.tolerance);
}

#[test]
fn point_metric_accepts_in_bounds_value() {
    let registry = Registry::new();
    assert!(registry.validate(K::TwoBedroomMedianRent, &MetricValue::point(1_850.0)));
    assert!(registry.validate(K::ConventionalRate, &MetricValue::point(0.065)));
}

#[test]
fn point_metric_rejects_out_of_bounds_and_non_finite() {
    let registry = Registry::new();
    assert!(!registry.validate(K::TwoBedroomMedianRent, &MetricValue::point(50.0)));
    assert!(!registry.validate(K::TwoBedroomMedianRent, &MetricValue::point(f64::NAN)));
    assert!(!registry.validate(K::VacancyRate, &MetricValue::point(0.75)));
    // Un-normalized percent fails until normalized.
    assert!(!registry.validate(K::ConventionalRate, &MetricValue::point(6.5)));
}

#[test]
fn range_metric_requires_min_below_max() {
    let registry = Registry::new();
    assert!(registry.validate(K::OneBedroomRentRange, &MetricValue::range(1_200.0, 1_500.0)));
    assert!(!registry.validate(K::OneBedroomRentRange, &MetricValue::range(1_500.0, 1_200.0)));
    assert!(!registry.validate(K::OneBedroomRentRange, &MetricValue::range(1_300.0, 1_300.0)));
    assert!(!registry.validate(K::OneBedroomRentRange, &MetricValue::range(100.0, 1_300.0)));
}

#[test]
fn shape_mismatch_is_rejected() {
    let registry = Registry::new();
    assert!(!registry.validate(K::OneBedroomRentRange, &MetricValue::point(1_300.0)));
    let err = registry
        .check(K::MedianHomePrice, &MetricValue::range(300_000.0, 400_000.0))
        .unwrap_err();
    assert!(matches!(err, RegistryError::ShapeMismatch { .. }));
}

#[test]
fn unknown_key_fails_closed() {
    let empty = Registry::from_specs(Vec::new());
    assert!(!empty.validate(K::VacancyRate, &MetricValue::point(0.05)));
    let err = empty.check(K::VacancyRate, &MetricValue::point(0.05)).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownMetric { .. }));

    let registry = Registry::new();
    assert!(!registry.validate_named("cap_rate_guess", &MetricValue::point(0.05)));
    assert!(registry.validate_named("vacancy_rate", &MetricValue::point(0.05)));
}

#[test]
fn normalize_rate_divides_percentages_only_for_rate_metrics() {
    let registry = Registry::new();
    assert!((registry.normalize_rate(K::ConventionalRate, 6.5) - 0.065).abs() < 1e-12);
    assert_eq!(registry.normalize_rate(K::ConventionalRate, 0.065), 0.065);
    assert_eq!(registry.normalize_rate(K::TwoBedroomMedianRent, 1_850.0), 1_850.0);
    assert_eq!(
        registry.spec(K::PropertyTaxRate).unwrap().unit,
        UnitConvention::Rate
    );
}

#[test]
fn normalize_value_maps_both_range_ends() {
    let registry = Registry::new();
    let normalized = registry.normalize_value(K::VacancyRate, MetricValue::range(4.0, 6.0));
    assert_eq!(normalized, MetricValue::range(0.04, 0.06));
}

#[test]
fn tolerance_override_takes_precedence() {
    let registry = Registry::new();
    let mut overrides = HashMap::new();
    overrides.insert(
        "median_home_price".to_string(),
        ToleranceOverride {
            tolerance: 0.4,
            critical: None,
        },
    );
    let tol = registry.tolerance(K::MedianHomePrice, &overrides).unwrap();
    assert_eq!(tol.tolerance, 0.4);
    assert_eq!(tol.critical, None);

    let rent = registry.tolerance(K::StudioMedianRent, &overrides).unwrap();
    assert_eq!(rent.tolerance, 0.10);
}

#[test]
fn range_rent_keys_are_range_shaped() {
    let registry = Registry::new();
    for key in [
        K::StudioRentRange,
        K::OneBedroomRentRange,
        K::TwoBedroomRentRange,
        K::ThreeBedroomRentRange,
    ] {
        assert_eq!(registry.spec(key).unwrap().shape, ValueShape::Range);
    }
}
