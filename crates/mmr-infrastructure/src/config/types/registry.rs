//! Plugin registry configuration types

use mmr_application::constants::DEFAULT_PLUGIN_SOURCES;
use serde::{Deserialize, Serialize};

/// Plugin registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Source locations scanned by discovery, as module paths
    pub sources: Vec<String>,

    /// Run discovery when the shared registry is created
    pub discover: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_PLUGIN_SOURCES.iter().map(ToString::to_string).collect(),
            discover: true,
        }
    }
}

impl RegistryConfig {
    /// Sources discovery should scan, empty when discovery is disabled
    pub fn effective_sources(&self) -> &[String] {
        if self.discover {
            self.sources.as_slice()
        } else {
            &[]
        }
    }
}
