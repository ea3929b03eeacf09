//! In-memory resolution cache using moka

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{DomainError, ModelRecord, ModelSource};

/// Configuration for the per-query resolution cache
#[derive(Debug, Clone)]
pub struct ResolutionCacheConfig {
    /// Maximum number of cached query resolutions
    pub max_capacity: u64,
    /// Freshness window: resolutions older than this require a fresh
    /// upstream query
    pub ttl: Duration,
}

impl Default for ResolutionCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            ttl: Duration::from_secs(1800),
        }
    }
}

impl ResolutionCacheConfig {
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Caching decorator over any [`ModelSource`].
///
/// Shields the upstream store from repeated identical batch submissions:
/// within the freshness window a query is served from cache, including the
/// ids generated during mapping, so re-submission returns identical
/// records. Failed resolutions are not cached.
pub struct CachedModelSource {
    inner: Arc<dyn ModelSource>,
    cache: MokaCache<String, Vec<ModelRecord>>,
}

impl CachedModelSource {
    pub fn new(inner: Arc<dyn ModelSource>, config: ResolutionCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl)
            .build();

        Self { inner, cache }
    }
}

#[async_trait]
impl ModelSource for CachedModelSource {
    async fn find_models(&self, query: &str) -> Result<Vec<ModelRecord>, DomainError> {
        if let Some(models) = self.cache.get(query).await {
            debug!(query, "Resolution cache hit");
            return Ok(models);
        }

        let models = self.inner.find_models(query).await?;
        self.cache.insert(query.to_string(), models.clone()).await;
        Ok(models)
    }
}
