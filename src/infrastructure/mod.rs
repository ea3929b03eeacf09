//! Infrastructure layer - upstream integration and technical services

pub mod cache;
pub mod logging;
pub mod resolver;
pub mod vmh;

pub use cache::{CachedModelSource, ResolutionCacheConfig};
pub use resolver::{ResolutionService, RESOLUTION_FAILED_MESSAGE};
pub use vmh::{HttpVmhTransport, VmhClient, VmhTransport};
