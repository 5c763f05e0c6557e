use chrono::{DateTime, Utc};
use marketfuse_core::models::Geography;
use serde::{Deserialize, Serialize};

/// One unstructured answer from a research collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFinding {
    /// Requested metric name; must be a canonical key name.
    pub metric: String,
    pub geography: Geography,
    pub answer: String,
    pub source_id: String,
    /// Explicit data timestamp, when the source stated one.
    pub data_timestamp: Option<DateTime<Utc>>,
}

impl RawFinding {
    pub fn new(
        metric: impl Into<String>,
        geography: Geography,
        answer: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            metric: metric.into(),
            geography,
            answer: answer.into(),
            source_id: source_id.into(),
            data_timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.data_timestamp = Some(ts);
        self
    }
}
