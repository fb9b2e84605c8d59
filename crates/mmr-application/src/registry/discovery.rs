//! Plugin discovery
//!
//! Plugin packages submit entries into [`METADATA_PLUGINS`] at compile time;
//! discovery scans those entries for the configured source locations and
//! registers what it finds. Linking a plugin crate is enough to make its
//! plugins discoverable.
//!
//! ## Registering a plugin (in a plugin crate)
//!
//! ```ignore
//! use mmr_application::registry::{METADATA_PLUGINS, MetadataPluginEntry, PluginClass};
//!
//! #[linkme::distributed_slice(METADATA_PLUGINS)]
//! static USER_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
//!     source: module_path!(),
//!     class: PluginClass::of::<UserMetadata>,
//! };
//! ```
//!
//! Discovery is best-effort: a source with no entries, a plugin that fails to
//! load or a name collision is recorded in the [`DiscoveryReport`] and logged,
//! and the scan moves on.

use std::panic;

use mmr_domain::Error;
use tracing::{debug, warn};

use super::class::PluginClass;
use super::table::PluginRegistry;

/// Registry entry submitted by a plugin package
pub struct MetadataPluginEntry {
    /// Module path of the declaring module (`module_path!()`)
    pub source: &'static str,
    /// Builds the plugin class
    pub class: fn() -> PluginClass,
}

// Auto-collection via linkme distributed slices - plugins submit entries at compile time
#[linkme::distributed_slice]
pub static METADATA_PLUGINS: [MetadataPluginEntry] = [..];

/// A fault isolated during discovery
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryFailure {
    /// No linked plugin lives under the source location
    #[error("Plugin source '{location}' not found")]
    SourceNotFound {
        /// Normalised source location
        location: String,
    },

    /// Building a plugin class panicked
    #[error("Failed to load plugin from {module}")]
    Load {
        /// Source location being scanned
        location: String,
        /// Module that declared the entry
        module: &'static str,
    },

    /// The registry refused a discovered plugin
    #[error("Failed to register plugin '{plugin}' from {location}: {error}")]
    Registration {
        /// Source location being scanned
        location: String,
        /// Plugin name
        plugin: String,
        /// Registration error
        #[source]
        error: Error,
    },
}

/// Outcome of a discovery run
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Number of plugins registered by this run
    pub registered: usize,
    /// Faults isolated during the run
    pub failures: Vec<DiscoveryFailure>,
}

impl DiscoveryReport {
    /// Whether the run completed without any isolated fault
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl PluginRegistry {
    /// Discover and register plugins linked under the given sources
    ///
    /// Returns the number of plugins registered.
    pub fn discover_plugins<S: AsRef<str>>(&self, sources: &[S]) -> usize {
        self.discover(sources).registered
    }

    /// Discover plugins linked under the given sources, with a full report
    pub fn discover<S: AsRef<str>>(&self, sources: &[S]) -> DiscoveryReport {
        self.discover_entries(&METADATA_PLUGINS, sources)
    }

    /// Discover plugins from an explicit entry list
    ///
    /// Sources are module paths (`mmr_plugins`, `mmr_plugins::pi`); dotted
    /// notation is accepted. Existing registrations are never overridden.
    pub fn discover_entries<S: AsRef<str>>(
        &self,
        entries: &[MetadataPluginEntry],
        sources: &[S],
    ) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        for source in sources {
            let location = normalize_source(source.as_ref());
            let matching: Vec<&MetadataPluginEntry> = entries
                .iter()
                .filter(|entry| belongs_to(entry.source, &location))
                .collect();

            if matching.is_empty() {
                debug!(source = %location, "Plugin source not found, skipping plugin discovery");
                report
                    .failures
                    .push(DiscoveryFailure::SourceNotFound { location });
                continue;
            }

            for entry in matching {
                let class = match panic::catch_unwind(entry.class) {
                    Ok(class) => class,
                    Err(_) => {
                        warn!(source = %location, module = entry.source, "Failed to load plugin");
                        report.failures.push(DiscoveryFailure::Load {
                            location: location.clone(),
                            module: entry.source,
                        });
                        continue;
                    }
                };

                let plugin = class.name().to_string();
                match self.register_plugin(class, false) {
                    Ok(()) => report.registered += 1,
                    Err(error) => {
                        warn!(source = %location, plugin = %plugin, error = %error, "Failed to register discovered plugin");
                        report.failures.push(DiscoveryFailure::Registration {
                            location: location.clone(),
                            plugin,
                            error,
                        });
                    }
                }
            }
        }

        debug!(
            registered = report.registered,
            failures = report.failures.len(),
            "Plugin discovery finished"
        );
        report
    }
}

/// Normalise a source location to a Rust module path
pub fn normalize_source(source: &str) -> String {
    source.trim().replace('.', "::")
}

fn belongs_to(module: &str, location: &str) -> bool {
    !location.is_empty()
        && module
            .strip_prefix(location)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}
