//! Repository client for the VMH microbe record store

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::VmhConfig;
use crate::domain::{DomainError, ModelRecord, ModelSource};
use crate::infrastructure::vmh::mapping::map_records;
use crate::infrastructure::vmh::transport::VmhTransport;

/// Resolves one query name against the VMH record store with a two-tier
/// match strategy.
///
/// Tier 1 filters on exact reconstruction identifier, which is unambiguous
/// and yields a reliably constructible artifact URL. Only when it returns
/// nothing does tier 2 fall back to case-insensitive substring containment
/// on the organism name.
pub struct VmhClient {
    transport: Arc<dyn VmhTransport>,
    config: VmhConfig,
}

impl VmhClient {
    pub fn new(transport: Arc<dyn VmhTransport>, config: VmhConfig) -> Self {
        Self { transport, config }
    }

    async fn list_records(&self, filter: &str, value: &str) -> Result<Vec<Value>, DomainError> {
        let query = [
            (filter.to_string(), value.to_string()),
            ("page_size".to_string(), self.config.page_size.to_string()),
        ];
        let body = self
            .transport
            .get_json(&self.config.api_base_url, &query)
            .await?;

        Ok(extract_items(body))
    }
}

#[async_trait]
impl ModelSource for VmhClient {
    async fn find_models(&self, query: &str) -> Result<Vec<ModelRecord>, DomainError> {
        let exact = self.list_records("reconstruction", query).await?;
        if !exact.is_empty() {
            debug!(query, records = exact.len(), "Exact reconstruction match");
            return Ok(map_records(query, &exact, &self.config));
        }

        let fuzzy = self.list_records("organism__icontains", query).await?;
        debug!(query, records = fuzzy.len(), "Organism substring fallback");
        Ok(map_records(query, &fuzzy, &self.config))
    }
}

/// The store paginates in an envelope, but the shape varies: a plain list,
/// `{"results": [...]}`, or `{"items": [...]}`. Anything else counts as
/// zero records rather than an error.
fn extract_items(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(items)) => items,
            _ => match envelope.remove("items") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
        },
        _ => Vec::new(),
    }
}
