//! # marketfuse-cache
//!
//! Process-lifetime store of immutable [`CityRentTable`]s keyed by geography.
//!
//! - Publication swaps a single `Arc`; readers never see a partial table.
//! - Lookups walk ZIP → City → County → State and finally a static baseline,
//!   recording the depth used and a confidence label.
//! - [`ReferenceConfigCache`] serves loan limits, rates and tax rates on a
//!   TTL, falling back to the static baseline when a refresh fails.

pub mod condition;
pub mod label;
pub mod reference;
pub mod store;
pub mod table;
pub mod unit_type;

pub use condition::ConditionGrade;
pub use label::DataConfidenceLabel;
pub use reference::ReferenceConfigCache;
pub use store::{CacheStatsSnapshot, RentLookup, RentTableCache};
pub use table::{CityRentTable, CityRentTableBuilder, RentEntry, TableMetadata};
pub use unit_type::{UnitQuery, UnitType};
