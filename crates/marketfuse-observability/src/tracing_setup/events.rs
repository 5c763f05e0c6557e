//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// An observation failed validation and was dropped.
pub fn observation_dropped(metric: &str, source: &str, reason: &str) {
    tracing::warn!(
        event = "observation_dropped",
        metric = %metric,
        source = %source,
        reason = %reason,
        "observation dropped"
    );
}

/// Sources disagree beyond the critical tolerance; left for review.
pub fn divergence_detected(metric: &str, geography: &str, disagreement: f64) {
    tracing::warn!(
        event = "divergence_detected",
        metric = %metric,
        geography = %geography,
        disagreement = disagreement,
        "critical divergence detected"
    );
}

pub fn geography_quarantined(geography: &str, corrections: u32, avg_delta: f64) {
    tracing::warn!(
        event = "geography_quarantined",
        geography = %geography,
        corrections = corrections,
        avg_delta = avg_delta,
        "geography quarantined"
    );
}

/// A lookup was served above the requested level. `served_by` is `None`
/// when the static baseline answered.
pub fn fallback_used(requested: &str, served_by: Option<&str>, depth: usize) {
    tracing::debug!(
        event = "fallback_used",
        requested = %requested,
        served_by = served_by.unwrap_or("baseline"),
        depth = depth,
        "fallback used"
    );
}

pub fn reference_refresh_failed(error: &str) {
    tracing::warn!(
        event = "reference_refresh_failed",
        error = %error,
        "reference refresh failed, serving baseline"
    );
}

pub fn table_published(geography: &str, hash: &str, replaced: bool) {
    tracing::info!(
        event = "table_published",
        geography = %geography,
        hash = %hash,
        replaced = replaced,
        "rent table published"
    );
}

pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// A pipeline run finished.
pub fn run_completed(run_id: &str, geography: &str, metrics: usize, curve_valid: bool) {
    tracing::info!(
        event = "run_completed",
        run_id = %run_id,
        geography = %geography,
        metrics = metrics,
        curve_valid = curve_valid,
        "pipeline run completed"
    );
}
