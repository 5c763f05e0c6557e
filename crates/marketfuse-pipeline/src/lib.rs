//! # marketfuse-pipeline
//!
//! Runs the engine end to end for one geography:
//!
//! 1. extract typed observations from raw research findings
//! 2. group by metric and reconcile each group in parallel
//! 3. enforce a strictly increasing rent curve from the reconciled medians
//! 4. check reported rent bands for consistency
//! 5. feed curve corrections into the reconciliation context
//! 6. publish an immutable rent table for the geography
//!
//! Also serves rent lookups and per-property rent estimates against the
//! published tables.

pub mod bands;
pub mod pipeline;
pub mod report;

pub use pipeline::MarketPipeline;
pub use report::{PipelineReport, PropertyRent};
