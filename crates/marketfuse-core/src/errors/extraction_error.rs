/// Finding-extractor errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no numeric value found in finding from {source_id}")]
    NoValueFound { source_id: String },

    #[error("derived metric {metric} needs {needed} samples, found {actual}")]
    InsufficientSamples {
        metric: String,
        needed: u32,
        actual: u32,
    },
}
