//! Port traits implemented by metadata plugins

pub mod model;

pub use model::{MetadataModel, MetadataPlugin, derive_plugin_name};
