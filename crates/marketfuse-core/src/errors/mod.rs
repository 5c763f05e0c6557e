mod cache_error;
mod extraction_error;
mod marketfuse_error;
mod reconcile_error;
mod registry_error;
mod rent_curve_error;

pub use cache_error::CacheError;
pub use extraction_error::ExtractionError;
pub use marketfuse_error::{MarketFuseError, MarketFuseResult};
pub use reconcile_error::ReconcileError;
pub use registry_error::RegistryError;
pub use rent_curve_error::RentCurveError;
