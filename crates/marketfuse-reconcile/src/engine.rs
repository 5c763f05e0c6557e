use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use marketfuse_core::config::ReconcileConfig;
use marketfuse_core::constants::issues;
use marketfuse_core::errors::{MarketFuseResult, ReconcileError};
use marketfuse_core::models::{
    CanonicalMetricKey, ConfidenceTier, Geography, Observation, ReconciledMetric,
};
use marketfuse_observability::tracing_setup::events;
use marketfuse_registry::{Registry, ToleranceSpec};
use tracing::debug;

use crate::context::ReconciliationContext;
use crate::factors::{self, WeightBreakdown};
use crate::rules::{self, RuleInputs};

/// Fallback tolerance for metrics the registry does not know. Never reached
/// for observations that passed validation.
const UNKNOWN_TOLERANCE: ToleranceSpec = ToleranceSpec {
    tolerance: 0.0,
    critical: None,
};

/// Source reconciler: weighted consensus over observations of one
/// metric at one geography.
#[derive(Debug, Clone)]
pub struct Reconciler {
    registry: Registry,
    config: ReconcileConfig,
}

impl Reconciler {
    pub fn new(registry: Registry, config: ReconcileConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Per-observation weights at `now`.
    pub fn weights(&self, observations: &[Observation], now: DateTime<Utc>) -> Vec<WeightBreakdown> {
        observations
            .iter()
            .map(|o| factors::compute(o, &self.config, now))
            .collect()
    }

    /// Fuse `observations` into one reconciled metric.
    ///
    /// All observations must share one metric and geography. Observations
    /// failing registry validation are dropped and noted as an issue; if none
    /// remain the call fails.
    pub fn reconcile(
        &self,
        observations: &[Observation],
        ctx: &ReconciliationContext,
        now: DateTime<Utc>,
    ) -> MarketFuseResult<ReconciledMetric> {
        let first = observations.first().ok_or_else(|| ReconcileError::NoValidObservations {
            metric: "<none>".to_string(),
            geography: "<none>".to_string(),
        })?;
        let metric = first.metric;
        let geography = first.geography.clone();

        if let Some(other) = observations
            .iter()
            .find(|o| o.metric != metric || o.geography != geography)
        {
            return Err(ReconcileError::MixedObservations {
                details: format!(
                    "{metric}@{geography} and {}@{}",
                    other.metric, other.geography
                ),
            }
            .into());
        }

        let valid: Vec<&Observation> = observations
            .iter()
            .filter(|o| self.registry.validate(o.metric, &o.value))
            .collect();
        let dropped = observations.len() - valid.len();
        if valid.is_empty() {
            return Err(ReconcileError::NoValidObservations {
                metric: metric.to_string(),
                geography: geography.to_string(),
            }
            .into());
        }

        let mut weights: Vec<f64> = valid
            .iter()
            .map(|o| factors::compute(o, &self.config, now).weight)
            .collect();
        if weights.iter().sum::<f64>() <= 0.0 {
            // Every source fully distrusted: fall back to an unweighted mean.
            weights = vec![1.0; valid.len()];
        }
        let total: f64 = weights.iter().sum();

        let value = valid
            .iter()
            .zip(&weights)
            .map(|(o, w)| w * o.value.center())
            .sum::<f64>()
            / total;

        let disagreement = weighted_disagreement(&valid, &weights, value);
        let uncertainty = weighted_uncertainty(&valid, &weights, value);

        let has_high_source = valid
            .iter()
            .zip(&weights)
            .any(|(o, w)| o.tier == ConfidenceTier::High && *w > 0.0);

        let tolerance = self
            .registry
            .tolerance(metric, &self.config.tolerance_overrides)
            .unwrap_or(UNKNOWN_TOLERANCE);

        let quarantined = ctx.is_quarantined(&geography);
        let mut classification = rules::classify(&RuleInputs {
            disagreement,
            tolerance,
            has_high_source,
            observation_count: valid.len(),
            min_sources_for_high: self.config.min_sources_for_high,
            quarantined,
        });

        if dropped > 0 {
            classification
                .issues
                .push(format!("{}: {dropped}", issues::DROPPED_INVALID));
        }

        if classification.requires_review {
            events::divergence_detected(metric.name(), &geography.to_string(), disagreement);
        }

        debug!(
            metric = %metric,
            geography = %geography,
            value,
            disagreement,
            tier = %classification.tier,
            observations = valid.len(),
            "metric reconciled"
        );

        Ok(ReconciledMetric {
            metric,
            geography,
            value,
            uncertainty,
            band_low: (value - uncertainty).max(0.0),
            band_high: value + uncertainty,
            tier: classification.tier,
            observation_count: valid.len(),
            issues: classification.issues,
            requires_review: classification.requires_review,
            updated_at: now,
        })
    }
}

/// Bucket a mixed batch by (metric, geography), in a stable order.
pub fn group_observations(
    observations: &[Observation],
) -> Vec<((CanonicalMetricKey, Geography), Vec<Observation>)> {
    let mut groups: BTreeMap<(String, usize), ((CanonicalMetricKey, Geography), Vec<Observation>)> =
        BTreeMap::new();
    for o in observations {
        let key = (o.geography.to_string(), metric_index(o.metric));
        groups
            .entry(key)
            .or_insert_with(|| ((o.metric, o.geography.clone()), Vec::new()))
            .1
            .push(o.clone());
    }
    groups.into_values().collect()
}

fn metric_index(metric: CanonicalMetricKey) -> usize {
    CanonicalMetricKey::ALL
        .iter()
        .position(|k| *k == metric)
        .unwrap_or(usize::MAX)
}

/// `Σ w·|v − fused| / (Σ w · |fused|)`.
fn weighted_disagreement(obs: &[&Observation], weights: &[f64], fused: f64) -> f64 {
    if fused == 0.0 {
        return 0.0;
    }
    let total: f64 = weights.iter().sum();
    let spread: f64 = obs
        .iter()
        .zip(weights)
        .map(|(o, w)| w * (o.value.center() - fused).abs())
        .sum();
    spread / (total * fused.abs())
}

/// Weighted RMS of each observation's own σ plus its deviation from the fused value.
fn weighted_uncertainty(obs: &[&Observation], weights: &[f64], fused: f64) -> f64 {
    let total: f64 = weights.iter().sum();
    let var: f64 = obs
        .iter()
        .zip(weights)
        .map(|(o, w)| {
            let dev = o.value.center() - fused;
            w * (o.sigma * o.sigma + dev * dev)
        })
        .sum();
    (var / total).sqrt()
}
