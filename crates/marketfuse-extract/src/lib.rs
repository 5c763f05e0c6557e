//! # marketfuse-extract
//!
//! Boundary adapter: turns unstructured research answers into typed
//! [`Observation`](marketfuse_core::Observation)s.
//!
//! - Monetary parsing: one token is a point (σ = 15% of value), two tokens a
//!   range (midpoint, σ = width / 2.698).
//! - Rate parsing: percentage tokens, same point/range rules.
//! - Per-area vs whole-unit detection (`/sqft`, `psf`, ...).
//! - Derived metrics (price-to-annual-rent) with propagated σ and a minimum
//!   combined sample count.
//!
//! Nothing downstream depends on this crate; the reconciler only sees
//! observations.

pub mod derived;
pub mod extractor;
pub mod finding;
pub mod monetary;
pub mod rate;
mod tokens;

pub use derived::{derive_all, derive_price_to_rent};
pub use extractor::{FindingExtractor, TextFindingSource};
pub use finding::RawFinding;
pub use monetary::{parse_monetary_value, MonetaryKind, ParsedValue};
pub use rate::{parse_rate_value, parse_ratio_value};
