//! # marketfuse-reconcile
//!
//! Fuses every observation of one metric at one geography into a single
//! [`ReconciledMetric`](marketfuse_core::ReconciledMetric).
//!
//! Each observation is weighted by `trust(source) × 0.5^(age / half_life)`.
//! Confidence follows a fixed rule table over weighted relative
//! disagreement. Divergence beyond a metric's critical tolerance is surfaced
//! as an issue and flagged for review, never resolved silently.
//!
//! Quarantine state lives in an explicit [`ReconciliationContext`] owned by
//! the caller.

pub mod context;
pub mod engine;
pub mod factors;
pub mod rules;

pub use context::{CorrectionStats, ReconciliationContext};
pub use engine::{group_observations, Reconciler};
pub use factors::WeightBreakdown;
pub use rules::{classify, Classification};
