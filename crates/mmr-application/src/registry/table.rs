//! Plugin registry table
//!
//! Maps `(vo | GLOBAL, name)` to a [`PluginClass`]. Lookups honour the
//! requested scope exactly: a plugin registered for one virtual organization
//! is never returned for another scope, and global plugins are never returned
//! for an organization-scoped lookup.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use mmr_domain::constants::GLOBAL_SCOPE;
use mmr_domain::{Error, MetadataDescriptor, MetadataModel, MetadataPlugin, Result};
use tracing::{debug, info};

use super::class::{PluginClass, PluginInfo};

/// Identity key of a registered plugin
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginKey {
    vo: Option<String>,
    name: String,
}

impl PluginKey {
    /// Create a key for `name` in the given scope
    pub fn new(vo: Option<&str>, name: &str) -> Self {
        Self {
            vo: vo.map(str::to_string),
            name: name.to_string(),
        }
    }

    /// Organization scope, `None` for the global scope
    pub fn vo(&self) -> Option<&str> {
        self.vo.as_deref()
    }

    /// Plugin name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PluginKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.vo.as_deref().unwrap_or(GLOBAL_SCOPE),
            self.name
        )
    }
}

/// In-process registry of metadata plugin classes
///
/// Safe to share between threads; reads never block each other. Create
/// isolated instances with [`PluginRegistry::new`], or use the process-wide
/// instance from [`get_registry`](super::get_registry).
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: DashMap<PluginKey, Arc<PluginClass>>,
    virtual_organizations: DashSet<String>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin class
    ///
    /// Fails with [`Error::DuplicateRegistration`] when a class already holds
    /// the same `(vo, name)` key and `override_existing` is false; with
    /// `override_existing` the new class replaces the old one.
    pub fn register_plugin(&self, class: PluginClass, override_existing: bool) -> Result<()> {
        class.validate_shape()?;

        let key = PluginKey::new(class.vo(), class.name());
        let class = Arc::new(class);

        match self.plugins.entry(key) {
            Entry::Occupied(mut entry) => {
                if !override_existing {
                    return Err(Error::duplicate_registration(
                        class.name(),
                        class.vo(),
                        entry.get().type_name(),
                    ));
                }
                let replaced = entry.insert(Arc::clone(&class));
                debug!(
                    key = %entry.key(),
                    replaced = replaced.type_name(),
                    "Overriding metadata plugin"
                );
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&class));
            }
        }

        if let Some(vo) = class.vo() {
            self.virtual_organizations.insert(vo.to_string());
        }

        info!(
            plugin = class.name(),
            vo = class.vo().unwrap_or(GLOBAL_SCOPE),
            type_name = class.type_name(),
            "Registered metadata plugin"
        );
        Ok(())
    }

    /// Register plugin type `P`
    pub fn register<P: MetadataPlugin>(&self, override_existing: bool) -> Result<()> {
        self.register_plugin(PluginClass::of::<P>(), override_existing)
    }

    /// Look up the class registered at `(vo, name)`
    ///
    /// `vo = None` targets the global scope. Returns `None` when nothing is
    /// registered there.
    pub fn get_plugin(&self, name: &str, vo: Option<&str>) -> Option<Arc<PluginClass>> {
        self.plugins
            .get(&PluginKey::new(vo, name))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Names of the plugins visible in a scope, sorted
    ///
    /// `vo = None` lists every scope.
    pub fn list_plugins(&self, vo: Option<&str>) -> Vec<String> {
        let names: BTreeSet<String> = self
            .plugins
            .iter()
            .filter(|entry| vo.is_none() || entry.key().vo() == vo)
            .map(|entry| entry.key().name().to_string())
            .collect();
        names.into_iter().collect()
    }

    /// Organization tags with at least one registered plugin, sorted
    pub fn list_virtual_organizations(&self) -> Vec<String> {
        let vos: BTreeSet<String> = self
            .virtual_organizations
            .iter()
            .map(|vo| vo.key().clone())
            .collect();
        vos.into_iter().collect()
    }

    /// Schema information for the plugin at `(vo, name)`
    pub fn get_plugin_info(&self, name: &str, vo: Option<&str>) -> Option<PluginInfo> {
        self.get_plugin(name, vo).map(|class| class.info())
    }

    /// Instantiate the plugin a descriptor names
    ///
    /// Fails with [`Error::UnknownPlugin`] when the descriptor does not
    /// resolve, and with [`Error::Validation`] when its parameters do not fit
    /// the plugin's fields.
    pub fn instantiate_plugin(
        &self,
        descriptor: &MetadataDescriptor,
    ) -> Result<Box<dyn MetadataModel>> {
        let name = descriptor.metadata_class();
        let vo = descriptor.vo();

        let class = self
            .get_plugin(name, vo)
            .ok_or_else(|| Error::unknown_plugin(name, vo, self.list_plugins(vo)))?;

        let model = class.instantiate(descriptor.parameters().clone())?;
        debug!(
            plugin = name,
            vo = vo.unwrap_or(GLOBAL_SCOPE),
            "Instantiated metadata plugin"
        );
        Ok(model)
    }

    /// Check a descriptor against the registered plugins without failing
    ///
    /// Returns human-readable problems; empty when the descriptor would
    /// instantiate.
    pub fn validate_descriptor(&self, descriptor: &MetadataDescriptor) -> Vec<String> {
        let name = descriptor.metadata_class();
        let vo = descriptor.vo();

        let Some(class) = self.get_plugin(name, vo) else {
            return vec![Error::unknown_plugin(name, vo, self.list_plugins(vo)).to_string()];
        };

        let mut problems = Vec::new();
        let mut parameters = descriptor.parameters().clone();

        let unknown = class.unknown_fields(&parameters);
        if !unknown.is_empty() {
            problems.push(format!(
                "Unknown field(s) for plugin '{name}': {}",
                unknown.join(", ")
            ));
            parameters.retain(|key, _| !unknown.contains(key));
        }

        if let Err(e) = class.instantiate(parameters) {
            problems.push(e.to_string());
        }
        problems
    }

    /// Number of registered plugin classes across all scopes
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
