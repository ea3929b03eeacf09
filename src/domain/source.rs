//! Trait seam between the orchestrator and the upstream record store

use async_trait::async_trait;

use crate::domain::{DomainError, ModelRecord};

/// A source of canonical model records for a single query name.
///
/// Implemented by the VMH repository client and by the caching decorator
/// that wraps it, so the orchestrator never cares which one it holds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Resolve one query name to its model records (possibly empty).
    async fn find_models(&self, query: &str) -> Result<Vec<ModelRecord>, DomainError>;
}
