//! Domain layer - Core types and business rules

pub mod error;
pub mod model;
pub mod names;
pub mod source;

pub use error::DomainError;
pub use model::{ModelRecord, QueryResult};
pub use names::normalize_names;
pub use source::ModelSource;

#[cfg(test)]
pub use source::MockModelSource;
