//! Metadata model descriptor
//!
//! The declarative request used to resolve and instantiate a registered
//! plugin. A descriptor carries no behavior: it names a plugin, optionally
//! narrows the lookup to one virtual organization, and holds the parameters
//! handed to the plugin's constructor.
//!
//! In serialized form `metadata_class`, `vo` and `version` are named keys and
//! every other key is a parameter:
//!
//! ```
//! use mmr_domain::MetadataDescriptor;
//!
//! let descriptor: MetadataDescriptor = serde_json::from_str(
//!     r#"{"metadata_class": "PiSimulate", "num_points": 100}"#,
//! ).unwrap();
//! assert_eq!(descriptor.metadata_class(), "PiSimulate");
//! assert_eq!(descriptor.parameters()["num_points"], 100);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DESCRIPTOR_RESERVED_KEYS;
use crate::error::{Error, Result};

/// Request to instantiate a registered metadata model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDescriptor {
    metadata_class: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    vo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,

    #[serde(flatten)]
    parameters: Map<String, Value>,
}

impl MetadataDescriptor {
    /// Create a descriptor for the given plugin name with no parameters
    pub fn new(metadata_class: impl Into<String>) -> Self {
        Self {
            metadata_class: metadata_class.into(),
            vo: None,
            version: None,
            parameters: Map::new(),
        }
    }

    /// Narrow the lookup to a virtual organization
    pub fn with_vo(mut self, vo: impl Into<String>) -> Self {
        self.vo = Some(vo.into());
        self
    }

    /// Add one constructor parameter
    ///
    /// Reserved keys (`metadata_class`, `vo`, `version`) are not parameters;
    /// use the dedicated builders for them.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !is_reserved(&key) {
            self.parameters.insert(key, value.into());
        }
        self
    }

    /// Add several constructor parameters
    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        for (key, value) in parameters {
            self = self.with_parameter(key, value);
        }
        self
    }

    /// Registered plugin name to resolve
    pub fn metadata_class(&self) -> &str {
        &self.metadata_class
    }

    /// Virtual organization scope, if any
    pub fn vo(&self) -> Option<&str> {
        self.vo.as_deref()
    }

    /// Informational model version, if any
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Constructor parameters
    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Return a copy updated from a free-form mapping
    ///
    /// Reserved keys replace the descriptor identity. For parameters, when
    /// both the current and the new value are objects they are merged
    /// key-by-key (new keys win); any other value replaces the current one.
    pub fn merged(&self, update: Map<String, Value>) -> Result<Self> {
        let mut merged = self.clone();
        for (key, value) in update {
            match key.as_str() {
                "metadata_class" => match reserved_string(&key, value)? {
                    Some(class) => merged.metadata_class = class,
                    None => {
                        return Err(Error::validation(
                            "descriptor",
                            "'metadata_class' cannot be null",
                        ));
                    }
                },
                "vo" => merged.vo = reserved_string(&key, value)?,
                "version" => merged.version = reserved_string(&key, value)?,
                _ => match (merged.parameters.get_mut(&key), value) {
                    (Some(Value::Object(current)), Value::Object(incoming)) => {
                        current.extend(incoming);
                    }
                    (_, value) => {
                        merged.parameters.insert(key, value);
                    }
                },
            }
        }
        Ok(merged)
    }
}

fn is_reserved(key: &str) -> bool {
    DESCRIPTOR_RESERVED_KEYS.contains(&key)
}

fn reserved_string(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(Error::validation(
            "descriptor",
            format!("'{key}' must be a string, got {other}"),
        )),
    }
}
