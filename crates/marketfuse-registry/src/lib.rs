//! # marketfuse-registry
//!
//! Static knowledge about every canonical metric: valid numeric range,
//! unit convention (decimal rate, currency, plain ratio), value shape
//! (point or range), and reconciliation tolerances.
//!
//! Pure and stateless. Unknown keys fail closed.

pub mod registry;
pub mod spec;
pub mod table;

pub use registry::Registry;
pub use spec::{MetricSpec, ToleranceSpec, UnitConvention, ValueShape};
