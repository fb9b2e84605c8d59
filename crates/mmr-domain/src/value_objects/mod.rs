//! Value objects exchanged between the registry and its callers

pub mod descriptor;
pub mod query;

pub use descriptor::MetadataDescriptor;
pub use query::{InputQuery, QueryParams};
