//! Cache infrastructure - freshness-window caching of resolutions

mod in_memory;

pub use in_memory::{CachedModelSource, ResolutionCacheConfig};
