use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use marketfuse_core::config::ExtractionConfig;
use marketfuse_core::errors::{ExtractionError, MarketFuseResult, RegistryError};
use marketfuse_core::models::{CanonicalMetricKey, MetricValue, Observation};
use marketfuse_core::traits::IObservationSource;
use marketfuse_observability::tracing_setup::events;
use marketfuse_registry::{MetricSpec, Registry, UnitConvention, ValueShape};
use regex::Regex;
use tracing::debug;

use crate::derived;
use crate::finding::RawFinding;
use crate::monetary::{parse_monetary_value, MonetaryKind, ParsedValue};
use crate::rate::{parse_rate_value, parse_ratio_value};

/// "based on 42 listings", "n=17", "from 120 rentals".
static SAMPLE_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\bn\s*=\s*(?P<n>\d+)|(?P<m>\d+)\s+(?:listings|samples|rentals|comps|comparables|properties|units\s+surveyed|sales))",
    )
    .unwrap()
});

/// Parses raw findings into validated observations.
#[derive(Debug, Clone)]
pub struct FindingExtractor {
    registry: Registry,
    config: ExtractionConfig,
}

impl FindingExtractor {
    pub fn new(registry: Registry, config: ExtractionConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse every finding, drop anything that fails validation, then append
    /// derived metrics. Pure: the same inputs always give the same output.
    pub fn extract(&self, findings: &[RawFinding], now: DateTime<Utc>) -> Vec<Observation> {
        let mut observations: Vec<Observation> = findings
            .iter()
            .filter_map(|f| match self.extract_one(f, now) {
                Ok(obs) => Some(obs),
                Err(e) => {
                    debug!(
                        metric = %f.metric,
                        source = %f.source_id,
                        error = %e,
                        "finding produced no observation"
                    );
                    None
                }
            })
            .collect();

        let derived = derived::derive_all(&observations, &self.registry, &self.config);
        observations.extend(derived);
        observations
    }

    /// Parse one finding into an observation.
    pub fn extract_one(
        &self,
        finding: &RawFinding,
        now: DateTime<Utc>,
    ) -> MarketFuseResult<Observation> {
        let metric: CanonicalMetricKey = finding.metric.parse()?;
        let spec = self
            .registry
            .spec(metric)
            .copied()
            .ok_or_else(|| RegistryError::UnknownMetric {
                name: finding.metric.clone(),
            })?;

        let parsed = self.parse_for(&spec, &finding.answer).ok_or_else(|| {
            ExtractionError::NoValueFound {
                source_id: finding.source_id.clone(),
            }
        })?;

        if !kind_matches(metric, parsed.kind) {
            return Err(ExtractionError::NoValueFound {
                source_id: finding.source_id.clone(),
            }
            .into());
        }

        let parsed = self.rescale_rate(metric, parsed);
        let value = shape_value(&spec, &parsed).ok_or_else(|| {
            RegistryError::ShapeMismatch {
                metric: metric.name().to_string(),
                expected: "range".to_string(),
            }
        })?;
        let value = self.registry.normalize_value(metric, value);

        if let Err(e) = self.registry.check(metric, &value) {
            events::observation_dropped(metric.name(), &finding.source_id, &e.to_string());
            return Err(e.into());
        }

        Ok(Observation {
            metric,
            geography: finding.geography.clone(),
            value,
            sigma: parsed.sigma,
            source_id: finding.source_id.clone(),
            tier: self.config.tier_for(&finding.source_id),
            observed_at: finding.data_timestamp.unwrap_or(now),
            sample_count: sample_count(&finding.answer),
            raw_text: finding.answer.clone(),
        })
    }

    /// Carry the registry's percent-to-decimal conversion over to σ and the
    /// range, which are in the units the answer was written in.
    fn rescale_rate(&self, metric: CanonicalMetricKey, parsed: ParsedValue) -> ParsedValue {
        let value = self.registry.normalize_rate(metric, parsed.value);
        if value == parsed.value || parsed.value == 0.0 {
            return parsed;
        }
        let factor = value / parsed.value;
        ParsedValue {
            value,
            sigma: parsed.sigma * factor,
            range: parsed.range.map(|(lo, hi)| (lo * factor, hi * factor)),
            ..parsed
        }
    }

    fn parse_for(&self, spec: &MetricSpec, text: &str) -> Option<ParsedValue> {
        match spec.unit {
            UnitConvention::Currency => parse_monetary_value(text, &self.config),
            UnitConvention::Rate => parse_rate_value(text, &self.config),
            UnitConvention::Ratio => parse_ratio_value(text, &self.config),
        }
    }
}

/// Per-area metrics need a per-area answer and whole-unit metrics a whole-unit one.
fn kind_matches(metric: CanonicalMetricKey, kind: MonetaryKind) -> bool {
    let wants_per_area = matches!(
        metric,
        CanonicalMetricKey::PricePerSqft | CanonicalMetricKey::RentPerSqft
    );
    wants_per_area == (kind == MonetaryKind::PerArea)
}

fn shape_value(spec: &MetricSpec, parsed: &ParsedValue) -> Option<MetricValue> {
    match spec.shape {
        ValueShape::Point => Some(MetricValue::point(parsed.value)),
        ValueShape::Range => parsed.range.map(|(min, max)| MetricValue::range(min, max)),
    }
}

fn sample_count(text: &str) -> u32 {
    SAMPLE_COUNT_RE
        .captures(text)
        .and_then(|c| c.name("n").or_else(|| c.name("m")))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

/// [`IObservationSource`] over a fixed batch of text findings.
pub struct TextFindingSource {
    name: String,
    extractor: FindingExtractor,
    findings: Vec<RawFinding>,
}

impl TextFindingSource {
    pub fn new(
        name: impl Into<String>,
        extractor: FindingExtractor,
        findings: Vec<RawFinding>,
    ) -> Self {
        Self {
            name: name.into(),
            extractor,
            findings,
        }
    }
}

impl IObservationSource for TextFindingSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> MarketFuseResult<Vec<Observation>> {
        Ok(self.extractor.extract(&self.findings, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_patterns() {
        assert_eq!(sample_count("median $1,800 based on 42 listings"), 42);
        assert_eq!(sample_count("survey (n=17)"), 17);
        assert_eq!(sample_count("about $1,800"), 1);
    }

    #[test]
    fn per_area_metric_rejects_whole_unit_answer() {
        assert!(!kind_matches(CanonicalMetricKey::PricePerSqft, MonetaryKind::Average));
        assert!(!kind_matches(CanonicalMetricKey::MedianHomePrice, MonetaryKind::PerArea));
        assert!(kind_matches(CanonicalMetricKey::MedianHomePrice, MonetaryKind::Average));
    }
}
