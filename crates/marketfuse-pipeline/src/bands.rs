//! Rent bands from reported range observations.

use std::collections::BTreeMap;

use marketfuse_core::models::{BedroomClass, CanonicalMetricKey, MetricValue, Observation};
use marketfuse_rentcurve::{EnforcedCurve, UnitBand};

/// One band per bedroom class with range observations: the mean reported
/// low and high around the enforced median (or the range midpoint when no
/// curve exists).
pub fn bands_from_ranges(observations: &[Observation], curve: Option<&EnforcedCurve>) -> Vec<UnitBand> {
    let mut ranges: BTreeMap<BedroomClass, Vec<(f64, f64)>> = BTreeMap::new();
    for o in observations {
        let Some(class) = o.metric.bedroom_class() else {
            continue;
        };
        if o.metric == CanonicalMetricKey::median_rent(class) {
            continue;
        }
        if let MetricValue::Range { min, max } = o.value {
            ranges.entry(class).or_default().push((min, max));
        }
    }

    ranges
        .into_iter()
        .map(|(class, spans)| {
            let n = spans.len() as f64;
            let low = spans.iter().map(|s| s.0).sum::<f64>() / n;
            let high = spans.iter().map(|s| s.1).sum::<f64>() / n;
            let median = curve
                .map(|c| c.rent(class))
                .unwrap_or((low + high) / 2.0);
            UnitBand::new(class.label(), low, median, high)
        })
        .collect()
}
