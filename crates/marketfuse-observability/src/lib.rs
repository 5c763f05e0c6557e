//! # marketfuse-observability
//!
//! Structured tracing with span and event definitions, bounded degradation
//! tracking, run metrics, and the plain-text market dashboard.

pub mod dashboard;
pub mod degradation;
pub mod engine;
pub mod metrics;
pub mod tracing_setup;

pub use dashboard::MarketDashboard;
pub use degradation::DegradationTracker;
pub use engine::ObservabilityEngine;
pub use metrics::{RunMetrics, TierHistogram};
