//! Metrics computed from two other observations of the same geography.

use marketfuse_core::config::ExtractionConfig;
use marketfuse_core::errors::ExtractionError;
use marketfuse_core::models::{BedroomClass, CanonicalMetricKey, MetricValue, Observation};
use marketfuse_registry::Registry;
use tracing::debug;

/// Rent class used for the price-to-rent ratio, most commonly reported first.
const RENT_PRIORITY: [BedroomClass; 4] = [
    BedroomClass::TwoBedroom,
    BedroomClass::OneBedroom,
    BedroomClass::ThreeBedroom,
    BedroomClass::Studio,
];

/// Price divided by annual rent.
///
/// σ is propagated from both inputs' relative errors; the sample count is the
/// sum of both. The result takes the weaker tier and the older timestamp.
pub fn derive_price_to_rent(
    price: &Observation,
    rent: &Observation,
    min_samples: u32,
) -> Result<Observation, ExtractionError> {
    let samples = price.sample_count.saturating_add(rent.sample_count);
    if samples < min_samples {
        return Err(ExtractionError::InsufficientSamples {
            metric: CanonicalMetricKey::PriceToRentRatio.name().to_string(),
            needed: min_samples,
            actual: samples,
        });
    }

    let p = price.value.center();
    let annual_rent = rent.value.center() * 12.0;
    let ratio = p / annual_rent;

    let rel_p = relative(price.sigma, p);
    let rel_r = relative(rent.sigma, rent.value.center());
    let sigma = ratio.abs() * (rel_p * rel_p + rel_r * rel_r).sqrt();

    Ok(Observation {
        metric: CanonicalMetricKey::PriceToRentRatio,
        geography: price.geography.clone(),
        value: MetricValue::point(ratio),
        sigma,
        source_id: format!("derived:{}+{}", price.source_id, rent.source_id),
        tier: price.tier.min(rent.tier),
        observed_at: price.observed_at.min(rent.observed_at),
        sample_count: samples,
        raw_text: String::new(),
    })
}

/// Derive every computable metric from a batch of observations.
///
/// Pairs each home-price observation with each rent observation of the same
/// geography for the highest-priority bedroom class present there. Results
/// outside the registry bounds or under the sample minimum are discarded.
pub fn derive_all(
    observations: &[Observation],
    registry: &Registry,
    config: &ExtractionConfig,
) -> Vec<Observation> {
    let mut derived = Vec::new();

    let prices = observations
        .iter()
        .filter(|o| o.metric == CanonicalMetricKey::MedianHomePrice);

    for price in prices {
        let Some(rent_key) = RENT_PRIORITY
            .iter()
            .map(|c| CanonicalMetricKey::median_rent(*c))
            .find(|k| {
                observations
                    .iter()
                    .any(|o| o.metric == *k && o.geography == price.geography)
            })
        else {
            continue;
        };

        let rents = observations
            .iter()
            .filter(|o| o.metric == rent_key && o.geography == price.geography);

        for rent in rents {
            match derive_price_to_rent(price, rent, config.min_derived_samples) {
                Ok(obs) if registry.validate(obs.metric, &obs.value) => derived.push(obs),
                Ok(obs) => {
                    debug!(source = %obs.source_id, "derived ratio out of bounds, discarded");
                }
                Err(e) => debug!(error = %e, "derived metric discarded"),
            }
        }
    }

    derived
}

fn relative(sigma: f64, value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        sigma / value.abs()
    }
}
