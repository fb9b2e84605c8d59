//! # Metadata Model Registry - Application Layer
//!
//! The plugin registry: registration keyed by organization and name,
//! scoped lookup, validated instantiation from descriptors, best-effort
//! discovery of linked plugin packages, and the lazily created shared
//! instance.

pub mod constants;
pub mod registry;

pub use registry::{
    DiscoveryReport, MetadataPluginEntry, PluginClass, PluginInfo, PluginRegistry, get_registry,
    init_registry,
};
