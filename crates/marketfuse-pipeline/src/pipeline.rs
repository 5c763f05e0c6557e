use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use marketfuse_cache::{
    CityRentTable, ReferenceConfigCache, RentLookup, RentTableCache, TableMetadata, UnitQuery,
};
use marketfuse_core::config::MarketFuseConfig;
use marketfuse_core::errors::MarketFuseResult;
use marketfuse_core::models::{
    BedroomClass, CanonicalMetricKey, ConfidenceTier, GeoPath, Geography, Observation,
    Provenance, ReconciledMetric, ReferenceConfig,
};
use marketfuse_core::traits::IReferenceLoader;
use marketfuse_extract::{FindingExtractor, RawFinding};
use marketfuse_observability::tracing_setup::events;
use marketfuse_observability::{
    detect_span, enforce_span, extract_span, lookup_span, pipeline_span, reconcile_span,
    MarketDashboard, ObservabilityEngine,
};
use marketfuse_reconcile::{group_observations, ReconciliationContext, Reconciler};
use marketfuse_registry::Registry;
use marketfuse_rentcurve::{check_bands, EnforcedCurve, RentCurveEnforcer, RentCurveInput};
use marketfuse_units::{detect_units, PropertyRecord};
use rayon::prelude::*;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::bands::bands_from_ranges;
use crate::report::{PipelineReport, PropertyRent};

/// The engine wired together for repeated runs.
///
/// The reconciliation context and rent cache are shared state; both can be
/// injected so several pipelines (or a caller) see the same counters and
/// tables.
pub struct MarketPipeline {
    config: MarketFuseConfig,
    extractor: FindingExtractor,
    reconciler: Reconciler,
    enforcer: RentCurveEnforcer,
    context: ReconciliationContext,
    cache: Arc<RentTableCache>,
    reference: Option<ReferenceConfigCache>,
    observability: Mutex<ObservabilityEngine>,
}

impl MarketPipeline {
    pub fn new(config: MarketFuseConfig) -> Self {
        let registry = Registry::new();
        Self {
            extractor: FindingExtractor::new(registry.clone(), config.extraction.clone()),
            reconciler: Reconciler::new(registry, config.reconcile.clone()),
            enforcer: RentCurveEnforcer::new(config.rent_curve.clone()),
            context: ReconciliationContext::new(&config.reconcile),
            cache: Arc::new(RentTableCache::new(config.cache.clone())),
            reference: None,
            observability: Mutex::new(ObservabilityEngine::new()),
            config,
        }
    }

    pub fn from_toml(toml_str: &str) -> MarketFuseResult<Self> {
        Ok(Self::new(MarketFuseConfig::from_toml(toml_str)?))
    }

    pub fn with_context(mut self, context: ReconciliationContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_cache(mut self, cache: Arc<RentTableCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_reference_loader(mut self, loader: Arc<dyn IReferenceLoader>) -> Self {
        self.reference = Some(ReferenceConfigCache::from_config(loader, &self.config.cache));
        self
    }

    pub fn config(&self) -> &MarketFuseConfig {
        &self.config
    }

    pub fn context(&self) -> &ReconciliationContext {
        &self.context
    }

    pub fn cache(&self) -> &Arc<RentTableCache> {
        &self.cache
    }

    /// Run every stage for `geography` at the current time.
    pub fn run(&self, geography: &Geography, findings: &[RawFinding]) -> PipelineReport {
        self.run_at(geography, findings, Utc::now())
    }

    /// [`run`](Self::run) with an explicit clock.
    pub fn run_at(
        &self,
        geography: &Geography,
        findings: &[RawFinding],
        now: DateTime<Utc>,
    ) -> PipelineReport {
        let run_id = Uuid::new_v4();
        let _span = pipeline_span!(run_id, geography).entered();

        let findings: Vec<RawFinding> = findings
            .iter()
            .filter(|f| {
                let ours = f.geography == *geography;
                if !ours {
                    debug!(other = %f.geography, "skipping finding for another geography");
                }
                ours
            })
            .cloned()
            .collect();

        let observations = {
            let _span = extract_span!(findings.len()).entered();
            self.extractor.extract(&findings, now)
        };

        let (metrics, failures) = self.reconcile_groups(&observations, now);

        let curve = {
            let _span = enforce_span!(geography).entered();
            self.enforcer.enforce(&RentCurveInput::from_reconciled(&metrics))
        };
        let enforced = curve.curve.as_ref();

        let band_issues = check_bands(
            &bands_from_ranges(&observations, enforced),
            self.config.rent_curve.max_spread_ratio,
        );

        let published_hash = enforced.and_then(|c| {
            self.context.record_curve_corrections(geography, &c.points);
            self.publish_curve(geography, c, &metrics, &observations, now)
        });
        let quarantined = self.context.is_quarantined(geography);

        {
            let mut obs = self.observability();
            obs.metrics.runs += 1;
            obs.metrics.record_extraction(findings.len(), observations.len());
            obs.record_reconciled(&metrics);
            obs.metrics.record_curve(enforced.map(|c| {
                c.points
                    .iter()
                    .filter(|p| p.provenance != Provenance::Original)
                    .count()
            }));
        }

        events::run_completed(
            &run_id.to_string(),
            &geography.to_string(),
            metrics.len(),
            curve.valid,
        );

        PipelineReport {
            run_id,
            geography: geography.clone(),
            started_at: now,
            findings: findings.len(),
            observations: observations.len(),
            metrics,
            failures,
            curve,
            band_issues,
            published_hash,
            quarantined,
        }
    }

    /// Rent for one unit type through the fallback cascade. A table served
    /// from a quarantined geography is flagged and its label capped.
    pub fn lookup_rent<'a>(
        &self,
        path: &GeoPath,
        unit: impl Into<UnitQuery<'a>>,
        condition: &str,
    ) -> RentLookup {
        let unit = unit.into();
        let requested = path
            .most_specific()
            .map(|g| g.to_string())
            .unwrap_or_default();
        let label = format!("{unit:?}");
        let _span = lookup_span!(requested, label).entered();
        let mut lookup = self.cache.lookup(path, unit, condition, Utc::now());
        if lookup
            .served_by
            .as_ref()
            .is_some_and(|g| self.context.is_quarantined(g))
        {
            lookup.mark_quarantined();
        }
        lookup
    }

    /// Detected unit count times the rent of one average unit.
    ///
    /// Bedrooms are split evenly across units; a property with no bedroom
    /// count is priced per studio.
    pub fn rent_for_property(
        &self,
        path: &GeoPath,
        property: &PropertyRecord,
        condition: &str,
    ) -> PropertyRent {
        let units = {
            let _span = detect_span!().entered();
            detect_units(property)
        };
        let bedrooms_per_unit = property.bedrooms.unwrap_or(0) / units.units.max(1);
        let per_unit = self.lookup_rent(path, bedrooms_per_unit, condition);
        let total = per_unit.rent.map(|r| r * f64::from(units.units));
        PropertyRent {
            units,
            per_unit,
            total,
        }
    }

    /// Current reference configuration; the static baseline when no loader
    /// is configured. Refresh failures are recorded as degradations.
    pub fn reference_config(&self) -> Arc<ReferenceConfig> {
        let Some(reference) = &self.reference else {
            return Arc::new(ReferenceConfig::baseline());
        };
        let config = reference.get();
        let degradations = reference.drain_degradations();
        let mut obs = self.observability();
        if degradations.is_empty() {
            if !config.is_baseline {
                obs.mark_recovered("reference_config");
            }
        } else {
            obs.degradation.record_all(degradations);
        }
        config
    }

    pub fn dashboard(&self) -> MarketDashboard {
        let stats = self.cache.stats();
        self.observability()
            .dashboard()
            .with_cache(stats.lookups, stats.hit_rate(), stats.avg_fallback_depth())
            .with_quarantined(self.context.quarantined_count())
    }

    /// Observability state; poisoning is ignored since counters stay usable.
    pub fn observability(&self) -> MutexGuard<'_, ObservabilityEngine> {
        self.observability
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn reconcile_groups(
        &self,
        observations: &[Observation],
        now: DateTime<Utc>,
    ) -> (Vec<ReconciledMetric>, Vec<String>) {
        let groups = group_observations(observations);
        let results: Vec<(CanonicalMetricKey, MarketFuseResult<ReconciledMetric>)> = groups
            .par_iter()
            .map(|((metric, geography), group)| {
                let _span = reconcile_span!(metric, geography).entered();
                (*metric, self.reconciler.reconcile(group, &self.context, now))
            })
            .collect();

        let mut metrics = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (metric, result) in results {
            match result {
                Ok(m) => metrics.push(m),
                Err(e) => {
                    warn!(metric = %metric, error = %e, "metric group not reconciled");
                    failures.push(format!("{metric}: {e}"));
                }
            }
        }
        (metrics, failures)
    }

    /// Publish a table built from `curve`. Confidence is the weakest tier
    /// among the median rents, LOW for a quarantined geography or when any
    /// median diverged past its critical tolerance.
    fn publish_curve(
        &self,
        geography: &Geography,
        curve: &EnforcedCurve,
        metrics: &[ReconciledMetric],
        observations: &[Observation],
        now: DateTime<Utc>,
    ) -> Option<String> {
        let medians: Vec<&ReconciledMetric> = BedroomClass::ALL
            .iter()
            .filter_map(|c| {
                let key = CanonicalMetricKey::median_rent(*c);
                metrics.iter().find(|m| m.metric == key)
            })
            .collect();
        let confidence = if self.context.is_quarantined(geography)
            || medians.iter().any(|m| m.requires_review)
        {
            ConfidenceTier::Low
        } else {
            medians
                .iter()
                .map(|m| m.tier)
                .min()
                .unwrap_or(ConfidenceTier::Low)
        };
        let sources: BTreeSet<&str> = observations
            .iter()
            .filter(|o| o.metric.bedroom_class().is_some())
            .map(|o| o.source_id.as_str())
            .collect();
        let as_of = observations
            .iter()
            .filter(|o| o.metric.bedroom_class().is_some())
            .map(|o| o.observed_at)
            .max()
            .unwrap_or(now);

        let metadata = TableMetadata::new(as_of, confidence).with_sources(sources);
        match CityRentTable::from_curve(
            geography.clone(),
            &curve.points,
            &self.config.cache.grade_multipliers,
            metadata,
        ) {
            Ok(table) => {
                let hash = table.content_hash().to_string();
                self.cache.publish(table);
                Some(hash)
            }
            Err(e) => {
                warn!(geography = %geography, error = %e, "rent table not published");
                None
            }
        }
    }
}

impl Default for MarketPipeline {
    fn default() -> Self {
        Self::new(MarketFuseConfig::default())
    }
}

impl std::fmt::Debug for MarketPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketPipeline")
            .field("tables", &self.cache.len())
            .field("quarantined", &self.context.quarantined_count())
            .finish()
    }
}
