//! Span definitions per operation: extraction, reconciliation, curve
//! enforcement, cache lookup, unit detection, pipeline run.

/// Create an extraction span.
#[macro_export]
macro_rules! extract_span {
    ($finding_count:expr) => {
        tracing::info_span!("marketfuse.extract", finding_count = $finding_count)
    };
}

/// Create a reconciliation span for one metric/geography group.
#[macro_export]
macro_rules! reconcile_span {
    ($metric:expr, $geography:expr) => {
        tracing::info_span!("marketfuse.reconcile", metric = %$metric, geography = %$geography)
    };
}

/// Create a rent-curve enforcement span.
#[macro_export]
macro_rules! enforce_span {
    ($geography:expr) => {
        tracing::info_span!("marketfuse.enforce", geography = %$geography)
    };
}

#[macro_export]
macro_rules! lookup_span {
    ($geography:expr, $unit:expr) => {
        tracing::debug_span!("marketfuse.lookup", geography = %$geography, unit = %$unit)
    };
}

#[macro_export]
macro_rules! detect_span {
    () => {
        tracing::debug_span!("marketfuse.detect")
    };
}

/// Create a span covering one pipeline run.
#[macro_export]
macro_rules! pipeline_span {
    ($run_id:expr, $geography:expr) => {
        tracing::info_span!("marketfuse.pipeline", run_id = %$run_id, geography = %$geography)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EXTRACT: &str = "marketfuse.extract";
    pub const RECONCILE: &str = "marketfuse.reconcile";
    pub const ENFORCE: &str = "marketfuse.enforce";
    pub const LOOKUP: &str = "marketfuse.lookup";
    pub const DETECT: &str = "marketfuse.detect";
    pub const PIPELINE: &str = "marketfuse.pipeline";
}
