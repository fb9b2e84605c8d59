//! Metadata Plugin Registry
//!
//! Namespaced, override-controlled registration of metadata plugins,
//! link-time discovery, and the process-wide shared instance.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Plugin Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Plugin crate:      #[linkme::distributed_slice(             │
//! │                            METADATA_PLUGINS)]                   │
//! │                        static ENTRY: MetadataPluginEntry = ...  │
//! │                              ↓                                  │
//! │  2. Discovery:         entries under "mmr_plugins" →            │
//! │                        register_plugin(class, false)            │
//! │                              ↓                                  │
//! │  3. Table:             (vo | GLOBAL, name) → PluginClass        │
//! │                              ↓                                  │
//! │  4. Descriptor:        {"metadata_class": "PiSimulate", ...}    │
//! │                        → instantiate_plugin → dyn MetadataModel │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use mmr_application::registry::get_registry;
//! use mmr_domain::MetadataDescriptor;
//!
//! let descriptor = MetadataDescriptor::new("PiSimulate").with_parameter("num_points", 100);
//! let model = get_registry().instantiate_plugin(&descriptor)?;
//! ```

pub mod class;
pub mod discovery;
pub mod global;
pub mod table;

pub use class::{PluginClass, PluginInfo};
pub use discovery::{
    DiscoveryFailure, DiscoveryReport, METADATA_PLUGINS, MetadataPluginEntry, normalize_source,
};
pub use global::{get_registry, init_registry};
pub use table::{PluginKey, PluginRegistry};
