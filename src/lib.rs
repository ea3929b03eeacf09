//! VMH Model Gateway API
//!
//! Resolves batches of free-text organism names to genome-scale metabolic
//! reconstruction records in the VMH knowledge base, with:
//! - Two-tier matching (exact reconstruction id, organism substring fallback)
//! - Synthesized download links for MAT and SBML artifacts
//! - Concurrent per-name resolution with isolated failures
//! - Freshness-window caching of upstream responses

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use infrastructure::{
    CachedModelSource, HttpVmhTransport, ResolutionCacheConfig, ResolutionService, VmhClient,
};

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let transport = Arc::new(HttpVmhTransport::new(Duration::from_secs(
        config.vmh.request_timeout_secs,
    ))?);

    let client = Arc::new(VmhClient::new(transport, config.vmh.clone()));

    let cache_config = ResolutionCacheConfig::default()
        .with_max_capacity(config.vmh.cache_capacity)
        .with_ttl(Duration::from_secs(config.vmh.cache_ttl_secs));
    let source = Arc::new(CachedModelSource::new(client, cache_config));

    let resolver = Arc::new(ResolutionService::new(source));

    Ok(AppState::new(resolver, config.vmh.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_with_defaults() {
        let state = create_app_state(&AppConfig::default()).unwrap();
        assert!(state.vmh_config.api_base_url.contains("vmh.life"));
    }
}
