/// Source-reconciler errors.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("no valid observations for {metric} at {geography}")]
    NoValidObservations { metric: String, geography: String },

    #[error("observations span multiple metric/geography pairs: {details}")]
    MixedObservations { details: String },
}
