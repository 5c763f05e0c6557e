pub mod staleness;
pub mod trust;

use chrono::{DateTime, Utc};
use marketfuse_core::config::ReconcileConfig;
use marketfuse_core::models::Observation;

/// Per-observation weight with each factor kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightBreakdown {
    pub source_id: String,
    pub trust: f64,
    pub staleness: f64,
    pub weight: f64,
}

/// `trust × staleness` for one observation.
pub fn compute(obs: &Observation, config: &ReconcileConfig, now: DateTime<Utc>) -> WeightBreakdown {
    let trust = trust::weight(obs, config);
    let staleness = staleness::decay(obs.age_days(now), config.staleness_half_life_days);
    WeightBreakdown {
        source_id: obs.source_id.clone(),
        trust,
        staleness,
        weight: trust * staleness,
    }
}
