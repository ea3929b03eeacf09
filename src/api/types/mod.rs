//! Wire types for the resolution API

pub mod json;
pub mod resolution;

pub use json::Json;
pub use resolution::{
    ResolveModelsRequest, ResolveModelsResponse, INVALID_REQUEST_MESSAGE, MISSING_NAMES_MESSAGE,
};
