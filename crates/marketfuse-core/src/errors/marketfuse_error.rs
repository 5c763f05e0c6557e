use super::{CacheError, ExtractionError, ReconcileError, RegistryError, RentCurveError};

/// Top-level error type. Every subsystem error converts into this.
#[derive(Debug, thiserror::Error)]
pub enum MarketFuseError {
    #[error("registry error: {0}")]
    RegistryError(#[from] RegistryError),

    #[error("extraction error: {0}")]
    ExtractionError(#[from] ExtractionError),

    #[error("reconcile error: {0}")]
    ReconcileError(#[from] ReconcileError),

    #[error("rent curve error: {0}")]
    RentCurveError(#[from] RentCurveError),

    #[error("cache error: {0}")]
    CacheError(#[from] CacheError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type MarketFuseResult<T> = Result<T, MarketFuseError>;
