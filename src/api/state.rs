//! Application state for shared services

use std::sync::Arc;

use crate::config::VmhConfig;
use crate::domain::QueryResult;
use crate::infrastructure::ResolutionService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn ModelResolverTrait>,
    pub vmh_config: VmhConfig,
}

impl AppState {
    pub fn new(resolver: Arc<dyn ModelResolverTrait>, vmh_config: VmhConfig) -> Self {
        Self {
            resolver,
            vmh_config,
        }
    }
}

/// Trait for batch model resolution
#[async_trait::async_trait]
pub trait ModelResolverTrait: Send + Sync {
    /// Resolve a batch of normalized names, one ordered result per name.
    async fn resolve_batch(&self, names: &[String]) -> Vec<QueryResult>;
}

#[async_trait::async_trait]
impl ModelResolverTrait for ResolutionService {
    async fn resolve_batch(&self, names: &[String]) -> Vec<QueryResult> {
        ResolutionService::resolve_batch(self, names).await
    }
}
