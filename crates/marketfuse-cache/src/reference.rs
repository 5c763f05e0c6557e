//! TTL-refreshed reference configuration.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use marketfuse_core::config::CacheConfig;
use marketfuse_core::models::{DegradationEvent, ReferenceConfig};
use marketfuse_core::traits::IReferenceLoader;
use marketfuse_observability::tracing_setup::events;
use moka::sync::Cache;

const COMPONENT: &str = "reference_config";

/// Serves [`ReferenceConfig`] from a single-entry moka cache with a fixed TTL.
///
/// Reads between refreshes return the cached value. When the loader fails
/// the static baseline is served (and cached for the same TTL) and a
/// degradation event is recorded. Concurrent refreshes may both call the
/// loader; loads are idempotent.
pub struct ReferenceConfigCache {
    loader: Arc<dyn IReferenceLoader>,
    cache: Cache<(), Arc<ReferenceConfig>>,
    degradations: Mutex<Vec<DegradationEvent>>,
}

impl ReferenceConfigCache {
    pub fn new(loader: Arc<dyn IReferenceLoader>, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(1).time_to_live(ttl).build();
        Self {
            loader,
            cache,
            degradations: Mutex::new(Vec::new()),
        }
    }

    /// TTL taken from `config.reference_ttl_secs`.
    pub fn from_config(loader: Arc<dyn IReferenceLoader>, config: &CacheConfig) -> Self {
        Self::new(loader, Duration::from_secs(config.reference_ttl_secs))
    }

    /// Current reference values, loading if the cached copy has expired.
    pub fn get(&self) -> Arc<ReferenceConfig> {
        if let Some(current) = self.cache.get(&()) {
            return current;
        }
        let fresh = Arc::new(self.load());
        self.cache.insert((), Arc::clone(&fresh));
        fresh
    }

    /// Drop the cached copy so the next read reloads.
    pub fn invalidate(&self) {
        self.cache.invalidate(&());
    }

    /// Take every degradation recorded since the last drain.
    pub fn drain_degradations(&self) -> Vec<DegradationEvent> {
        let mut guard = self
            .degradations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *guard)
    }

    fn load(&self) -> ReferenceConfig {
        match self.loader.load() {
            Ok(config) => config,
            Err(e) => {
                events::reference_refresh_failed(&e.to_string());
                let event = DegradationEvent {
                    component: COMPONENT.to_string(),
                    failure: e.to_string(),
                    fallback_used: "static baseline".to_string(),
                    timestamp: Utc::now(),
                };
                self.degradations
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push(event);
                ReferenceConfig::baseline()
            }
        }
    }
}

impl std::fmt::Debug for ReferenceConfigCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceConfigCache")
            .field("cached", &self.cache.contains_key(&()))
            .finish()
    }
}
