//! Process-wide registry instance

use std::sync::OnceLock;

use tracing::info;

use super::table::PluginRegistry;
use crate::constants::DEFAULT_PLUGIN_SOURCES;

static REGISTRY: OnceLock<PluginRegistry> = OnceLock::new();

/// Shared registry, discovering the default plugin sources on first use
pub fn get_registry() -> &'static PluginRegistry {
    init_registry(&DEFAULT_PLUGIN_SOURCES)
}

/// Shared registry, discovering `sources` if this call creates it
///
/// Only the first initialisation runs discovery; later calls return the
/// existing instance whatever sources they pass. Discovery faults never
/// escape: the registry may simply hold fewer plugins.
pub fn init_registry<S: AsRef<str>>(sources: &[S]) -> &'static PluginRegistry {
    REGISTRY.get_or_init(|| {
        let registry = PluginRegistry::new();
        let report = registry.discover(sources);
        info!(
            registered = report.registered,
            failures = report.failures.len(),
            "Metadata plugin registry initialized"
        );
        registry
    })
}
