use std::collections::HashMap;

use marketfuse_core::config::ToleranceOverride;
use marketfuse_core::errors::RegistryError;
use marketfuse_core::models::{CanonicalMetricKey, MetricValue};
use tracing::debug;

use crate::spec::{MetricSpec, ToleranceSpec, UnitConvention, ValueShape};
use crate::table;

/// Lookup table from metric key to its spec.
///
/// A key without a spec has no validator: every value for it is rejected.
#[derive(Debug, Clone)]
pub struct Registry {
    specs: HashMap<CanonicalMetricKey, MetricSpec>,
}

impl Registry {
    /// Registry with the built-in spec for every canonical metric.
    pub fn new() -> Self {
        Self::from_specs(table::default_specs())
    }

    /// Registry restricted to the given specs.
    pub fn from_specs(specs: impl IntoIterator<Item = MetricSpec>) -> Self {
        Self {
            specs: specs.into_iter().map(|s| (s.key, s)).collect(),
        }
    }

    pub fn spec(&self, key: CanonicalMetricKey) -> Option<&MetricSpec> {
        self.specs.get(&key)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Range and shape check. Unknown keys always fail.
    pub fn validate(&self, key: CanonicalMetricKey, value: &MetricValue) -> bool {
        match self.check(key, value) {
            Ok(()) => true,
            Err(e) => {
                debug!(metric = %key, error = %e, "value rejected");
                false
            }
        }
    }

    /// Validate by metric name. Names that are not canonical keys fail.
    pub fn validate_named(&self, name: &str, value: &MetricValue) -> bool {
        match name.parse::<CanonicalMetricKey>() {
            Ok(key) => self.validate(key, value),
            Err(e) => {
                debug!(name = %name, error = %e, "unknown metric rejected");
                false
            }
        }
    }

    /// Like [`validate`](Self::validate) but explains the failure.
    pub fn check(&self, key: CanonicalMetricKey, value: &MetricValue) -> Result<(), RegistryError> {
        let spec = self.spec(key).ok_or_else(|| RegistryError::UnknownMetric {
            name: key.name().to_string(),
        })?;

        let out_of_bounds = |v: f64| RegistryError::OutOfBounds {
            metric: key.name().to_string(),
            value: v,
            min: spec.min,
            max: spec.max,
        };

        match (spec.shape, *value) {
            (ValueShape::Point, MetricValue::Point { value }) => {
                if spec.in_bounds(value) {
                    Ok(())
                } else {
                    Err(out_of_bounds(value))
                }
            }
            (ValueShape::Range, MetricValue::Range { min, max }) => {
                if !spec.in_bounds(min) {
                    return Err(out_of_bounds(min));
                }
                if !spec.in_bounds(max) {
                    return Err(out_of_bounds(max));
                }
                if min >= max {
                    return Err(RegistryError::ShapeMismatch {
                        metric: key.name().to_string(),
                        expected: "range with min < max".to_string(),
                    });
                }
                Ok(())
            }
            (ValueShape::Point, MetricValue::Range { .. }) => Err(RegistryError::ShapeMismatch {
                metric: key.name().to_string(),
                expected: "point".to_string(),
            }),
            (ValueShape::Range, MetricValue::Point { .. }) => Err(RegistryError::ShapeMismatch {
                metric: key.name().to_string(),
                expected: "range".to_string(),
            }),
        }
    }

    /// Convert a rate metric to a decimal fraction.
    ///
    /// Values above 1 are read as percentages and divided by 100; decimals
    /// pass through. Non-rate metrics and unknown keys pass through unchanged.
    /// Idempotent for inputs in `[0, 100]`.
    pub fn normalize_rate(&self, key: CanonicalMetricKey, value: f64) -> f64 {
        match self.spec(key) {
            Some(spec) if spec.unit == UnitConvention::Rate && value > 1.0 => value / 100.0,
            _ => value,
        }
    }

    /// [`normalize_rate`](Self::normalize_rate) applied to every number of a value.
    pub fn normalize_value(&self, key: CanonicalMetricKey, value: MetricValue) -> MetricValue {
        value.map(|v| self.normalize_rate(key, v))
    }

    /// Tolerances for `key`, with any configured override applied.
    pub fn tolerance(
        &self,
        key: CanonicalMetricKey,
        overrides: &HashMap<String, ToleranceOverride>,
    ) -> Option<ToleranceSpec> {
        if let Some(o) = overrides.get(key.name()) {
            return Some((*o).into());
        }
        self.spec(key).map(|s| s.tolerance)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
