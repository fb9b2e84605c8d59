//! Type-erased plugin classes
//!
//! A [`PluginClass`] is what the registry stores: the declared identity of a
//! [`MetadataPlugin`] type, its published field schema, and the shared
//! construction routine that turns an untyped parameter mapping into a
//! validated model instance.

use std::any::TypeId;
use std::collections::BTreeSet;

use mmr_domain::{Error, MetadataModel, MetadataPlugin, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

type Constructor = fn(Value) -> serde_json::Result<Box<dyn MetadataModel>>;

/// Registered "class" of a metadata plugin
#[derive(Debug, Clone)]
pub struct PluginClass {
    name: String,
    type_name: &'static str,
    type_id: TypeId,
    vo: Option<&'static str>,
    version: &'static str,
    description: &'static str,
    schema: Value,
    fields: BTreeSet<String>,
    accepts_extra: bool,
    construct: Constructor,
}

impl PluginClass {
    /// Build the class of plugin type `P`
    ///
    /// Usable as a function pointer in registry entries:
    /// `class: PluginClass::of::<MyMetadata>`.
    pub fn of<P: MetadataPlugin>() -> Self {
        let schema = schemars::schema_for!(P).to_value();
        let fields = declared_fields(&schema);
        let accepts_extra = schema
            .get("additionalProperties")
            .is_some_and(|extra| extra != &Value::Bool(false));

        Self {
            name: P::metadata_class(),
            type_name: std::any::type_name::<P>(),
            type_id: TypeId::of::<P>(),
            vo: P::VO,
            version: P::VERSION,
            description: P::DESCRIPTION,
            schema,
            fields,
            accepts_extra,
            construct: construct::<P>,
        }
    }

    /// Plugin name, unique within its organization scope
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified Rust type name of the implementation
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Owning virtual organization, `None` for global plugins
    pub fn vo(&self) -> Option<&'static str> {
        self.vo
    }

    /// Declared model version
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// JSON schema of the declared fields
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Declared field names, sorted
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Whether this class is the class of plugin type `P`
    pub fn is<P: MetadataPlugin>(&self) -> bool {
        self.type_id == TypeId::of::<P>()
    }

    /// Parameter keys that are not declared fields, sorted
    ///
    /// Always empty for plugins whose schema admits additional properties.
    pub fn unknown_fields(&self, parameters: &Map<String, Value>) -> Vec<String> {
        if self.accepts_extra {
            return Vec::new();
        }
        let unknown: BTreeSet<&String> = parameters
            .keys()
            .filter(|key| !self.fields.contains(*key))
            .collect();
        unknown.into_iter().cloned().collect()
    }

    /// Construct a validated model instance
    ///
    /// Unknown keys are rejected all at once, naming each of them; absent
    /// fields take their declared defaults; type mismatches and missing
    /// required fields are reported by the field deserializer.
    pub fn instantiate(&self, parameters: Map<String, Value>) -> Result<Box<dyn MetadataModel>> {
        let unknown = self.unknown_fields(&parameters);
        if !unknown.is_empty() {
            let declared: Vec<&str> = self.fields().collect();
            return Err(Error::validation(
                &self.name,
                format!(
                    "unknown field(s): {}; declared fields: [{}]",
                    unknown.join(", "),
                    declared.join(", ")
                ),
            ));
        }

        (self.construct)(Value::Object(parameters))
            .map_err(|e| Error::validation(&self.name, e.to_string()))
    }

    /// Structural check applied before registration
    pub fn validate_shape(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::invalid_plugin(self.type_name, "plugin name is empty"));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(Error::invalid_plugin(
                &self.name,
                "plugin name must contain only ASCII letters, digits, '_' or '-'",
            ));
        }
        if self.schema.get("type").and_then(Value::as_str) != Some("object") {
            return Err(Error::invalid_plugin(
                &self.name,
                format!(
                    "{} cannot be built from a field mapping; use a struct with named fields",
                    self.type_name
                ),
            ));
        }
        Ok(())
    }

    /// Publishable description of this class
    pub fn info(&self) -> PluginInfo {
        PluginInfo {
            metadata_class: self.name.clone(),
            vo: self.vo.map(str::to_string),
            version: self.version.to_string(),
            description: self.description.to_string(),
            schema: self.schema.clone(),
        }
    }
}

/// Schema information about a registered plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Registry name
    pub metadata_class: String,
    /// Owning virtual organization
    pub vo: Option<String>,
    /// Model version
    pub version: String,
    /// Human-readable description
    pub description: String,
    /// JSON schema of the declared fields
    pub schema: Value,
}

fn construct<P: MetadataPlugin>(parameters: Value) -> serde_json::Result<Box<dyn MetadataModel>> {
    let model: P = serde_json::from_value(parameters)?;
    Ok(Box::new(model))
}

fn declared_fields(schema: &Value) -> BTreeSet<String> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|properties| properties.keys().cloned().collect())
        .unwrap_or_default()
}
