//! Resolution orchestrator - concurrent per-name fan-out

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::domain::{ModelSource, QueryResult};

/// Fixed, non-technical message placed on a query whose resolution failed.
/// The underlying cause is logged, never exposed to the caller.
pub const RESOLUTION_FAILED_MESSAGE: &str = "Unable to retrieve models from the VMH database. \
     Check the name (reconstruction or organism) or try again later.";

/// Resolves a batch of normalized names, one concurrent task per name.
///
/// Tasks are mutually independent: a failed upstream call turns into a
/// per-query error on that result alone and never affects siblings. The
/// response is a single unit, so all tasks are joined before returning,
/// and the result order is the input order regardless of completion order.
pub struct ResolutionService {
    source: Arc<dyn ModelSource>,
}

impl ResolutionService {
    pub fn new(source: Arc<dyn ModelSource>) -> Self {
        Self { source }
    }

    pub async fn resolve_batch(&self, names: &[String]) -> Vec<QueryResult> {
        let tasks = names.iter().map(|name| self.resolve_one(name));
        join_all(tasks).await
    }

    async fn resolve_one(&self, name: &str) -> QueryResult {
        match self.source.find_models(name).await {
            Ok(models) => QueryResult::resolved(name, models),
            Err(error) => {
                warn!(query = name, %error, "Model resolution failed");
                QueryResult::failed(name, RESOLUTION_FAILED_MESSAGE)
            }
        }
    }
}
