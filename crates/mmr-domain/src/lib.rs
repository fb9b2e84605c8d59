//! # Metadata Model Registry - Domain Layer
//!
//! The base model contract every metadata plugin satisfies, the descriptor
//! used to request instances, and the error type shared by all layers.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ports`] | `MetadataModel` hooks and `MetadataPlugin` identity |
//! | [`value_objects`] | `MetadataDescriptor`, `InputQuery`, `QueryParams` |
//! | [`error`] | `Error` and `Result` |
//! | [`constants`] | Defaults shared across crates |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{MetadataModel, MetadataPlugin, derive_plugin_name};
pub use value_objects::{InputQuery, MetadataDescriptor, QueryParams};
