use crate::errors::MarketFuseResult;
use crate::models::ReferenceConfig;

/// Loads fresh reference configuration (loan limits, tax rates, mortgage rates).
pub trait IReferenceLoader: Send + Sync {
    fn load(&self) -> MarketFuseResult<ReferenceConfig>;
}
