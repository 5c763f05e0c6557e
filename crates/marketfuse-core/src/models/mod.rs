mod confidence_tier;
mod degradation_event;
mod geography;
mod metric_key;
mod metric_value;
mod observation;
mod reconciled_metric;
mod reference_config;
mod rent_curve;

pub use confidence_tier::ConfidenceTier;
pub use degradation_event::DegradationEvent;
pub use geography::{GeoLevel, GeoPath, Geography};
pub use metric_key::CanonicalMetricKey;
pub use metric_value::MetricValue;
pub use observation::Observation;
pub use reconciled_metric::ReconciledMetric;
pub use reference_config::ReferenceConfig;
pub use rent_curve::{BedroomClass, Provenance, RentCurvePoint};
