//! # marketfuse-core
//!
//! Foundation crate for the MarketFuse market-data engine.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MarketFuseConfig;
pub use errors::{MarketFuseError, MarketFuseResult};
pub use models::{
    BedroomClass, CanonicalMetricKey, ConfidenceTier, GeoLevel, GeoPath, Geography, MetricValue,
    Observation, Provenance, ReconciledMetric, RentCurvePoint,
};
