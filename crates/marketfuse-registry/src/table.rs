//! Built-in metric table.

use marketfuse_core::models::CanonicalMetricKey as K;

use crate::spec::{MetricSpec, ToleranceSpec, UnitConvention, ValueShape};

const RENT_TOLERANCE: ToleranceSpec = ToleranceSpec {
    tolerance: 0.10,
    critical: Some(0.30),
};

const PRICE_TOLERANCE: ToleranceSpec = ToleranceSpec {
    tolerance: 0.20,
    critical: Some(0.50),
};

const RATE_TOLERANCE: ToleranceSpec = ToleranceSpec {
    tolerance: 0.10,
    critical: Some(0.30),
};

const LOAN_LIMIT_TOLERANCE: ToleranceSpec = ToleranceSpec {
    tolerance: 0.05,
    critical: Some(0.15),
};

fn spec(
    key: K,
    unit: UnitConvention,
    shape: ValueShape,
    min: f64,
    max: f64,
    tolerance: ToleranceSpec,
) -> MetricSpec {
    MetricSpec {
        key,
        unit,
        shape,
        min,
        max,
        tolerance,
    }
}

/// Monthly rent bounds in dollars.
const RENT_MIN: f64 = 200.0;
const RENT_MAX: f64 = 20_000.0;

/// The default spec for every canonical metric.
pub fn default_specs() -> Vec<MetricSpec> {
    use UnitConvention::*;
    use ValueShape::*;

    vec![
        spec(K::StudioMedianRent, Currency, Point, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::OneBedroomMedianRent, Currency, Point, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::TwoBedroomMedianRent, Currency, Point, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::ThreeBedroomMedianRent, Currency, Point, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::StudioRentRange, Currency, Range, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::OneBedroomRentRange, Currency, Range, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::TwoBedroomRentRange, Currency, Range, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::ThreeBedroomRentRange, Currency, Range, RENT_MIN, RENT_MAX, RENT_TOLERANCE),
        spec(K::MedianHomePrice, Currency, Point, 10_000.0, 50_000_000.0, PRICE_TOLERANCE),
        spec(K::PricePerSqft, Currency, Point, 10.0, 10_000.0, PRICE_TOLERANCE),
        spec(K::RentPerSqft, Currency, Point, 0.1, 20.0, RENT_TOLERANCE),
        spec(K::ConventionalRate, Rate, Point, 0.005, 0.20, RATE_TOLERANCE),
        spec(K::FhaRate, Rate, Point, 0.005, 0.20, RATE_TOLERANCE),
        spec(K::FhaLoanLimit, Currency, Point, 100_000.0, 2_000_000.0, LOAN_LIMIT_TOLERANCE),
        spec(
            K::ConformingLoanLimit,
            Currency,
            Point,
            300_000.0,
            2_000_000.0,
            LOAN_LIMIT_TOLERANCE,
        ),
        spec(
            K::VacancyRate,
            Rate,
            Point,
            0.0,
            0.5,
            ToleranceSpec {
                tolerance: 0.35,
                critical: None,
            },
        ),
        spec(
            K::PropertyTaxRate,
            Rate,
            Point,
            0.0001,
            0.05,
            ToleranceSpec {
                tolerance: 0.25,
                critical: Some(0.60),
            },
        ),
        spec(
            K::PriceToRentRatio,
            Ratio,
            Point,
            1.0,
            100.0,
            ToleranceSpec {
                tolerance: 0.25,
                critical: None,
            },
        ),
    ]
}
