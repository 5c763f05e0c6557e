//! # marketfuse-units
//!
//! Classifies how many rentable units a property has, from whatever a listing
//! feed exposes: a structured style field, free-text description, bedroom and
//! bathroom counts. Never fails; the worst case is an `UNKNOWN`-confidence
//! single-unit answer flagged for research.

pub mod detector;
mod patterns;
pub mod property;
pub mod result;

pub use detector::{detect_units, MAX_ESTIMATED_UNITS, MIN_MULTI_FAMILY_UNITS};
pub use property::PropertyRecord;
pub use result::{DetectionConfidence, InferenceSource, UnitDetectionResult};
