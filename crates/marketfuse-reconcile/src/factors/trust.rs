use marketfuse_core::config::ReconcileConfig;
use marketfuse_core::models::Observation;

/// Trust weight for an observation's source.
///
/// An explicit per-source weight wins; otherwise the tier weight applies.
/// Negative weights are treated as zero.
pub fn weight(obs: &Observation, config: &ReconcileConfig) -> f64 {
    config
        .source_trust_overrides
        .get(&obs.source_id)
        .copied()
        .unwrap_or_else(|| config.trust_weights.weight(obs.tier))
        .max(0.0)
}
