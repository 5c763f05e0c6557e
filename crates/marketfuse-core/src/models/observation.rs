use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CanonicalMetricKey, ConfidenceTier, Geography, MetricValue};

/// One source's reported value for a metric at a geography and time.
///
/// Observations are ephemeral: they live for one reconciliation call and
/// must pass the registry validator before being fused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub metric: CanonicalMetricKey,
    pub geography: Geography,
    pub value: MetricValue,
    /// Standard deviation estimate for `value`.
    pub sigma: f64,
    pub source_id: String,
    pub tier: ConfidenceTier,
    pub observed_at: DateTime<Utc>,
    /// Number of underlying samples this observation summarizes.
    pub sample_count: u32,
    pub raw_text: String,
}

impl Observation {
    /// Minimal constructor; σ defaults to zero and sample count to one.
    pub fn new(
        metric: CanonicalMetricKey,
        geography: Geography,
        value: MetricValue,
        source_id: impl Into<String>,
        tier: ConfidenceTier,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            metric,
            geography,
            value,
            sigma: 0.0,
            source_id: source_id.into(),
            tier,
            observed_at,
            sample_count: 1,
            raw_text: String::new(),
        }
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = raw_text.into();
        self
    }

    /// Age in fractional days at `now`. Future timestamps count as age zero.
    pub fn age_days(&self, now: DateTime<Utc>) -> f64 {
        (now - self.observed_at).num_seconds().max(0) as f64 / 86_400.0
    }
}
