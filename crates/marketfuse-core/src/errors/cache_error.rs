/// Rent-table cache errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("unrecognized unit type: {label}")]
    UnknownUnitType { label: String },

    #[error("reference config load failed: {reason}")]
    ReferenceLoadFailed { reason: String },

    #[error("invalid rent table for {geography}: {reason}")]
    InvalidTable { geography: String, reason: String },
}
