//! Tests for the plugin registry table
//!
//! Every test builds an isolated registry; none touches the shared instance.

use mmr_application::PluginRegistry;
use mmr_domain::{Error, MetadataDescriptor, MetadataModel, MetadataPlugin};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
struct TestPluginMetadata {
    test_param: String,
}

impl Default for TestPluginMetadata {
    fn default() -> Self {
        Self {
            test_param: "default".to_string(),
        }
    }
}

impl MetadataModel for TestPluginMetadata {}

impl MetadataPlugin for TestPluginMetadata {
    const DESCRIPTION: &'static str = "Test plugin for unit tests";
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
struct TestVOPlugin {
    exp_param: i64,
}

impl Default for TestVOPlugin {
    fn default() -> Self {
        Self { exp_param: 42 }
    }
}

impl MetadataModel for TestVOPlugin {}

impl MetadataPlugin for TestVOPlugin {
    const DESCRIPTION: &'static str = "Test VO plugin";
    const VO: Option<&'static str> = Some("test_exp");
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
struct TestSecondVOPlugin {
    param2: String,
}

impl Default for TestSecondVOPlugin {
    fn default() -> Self {
        Self {
            param2: "test".to_string(),
        }
    }
}

impl MetadataModel for TestSecondVOPlugin {}

impl MetadataPlugin for TestSecondVOPlugin {
    const DESCRIPTION: &'static str = "Test plugin for second VO";
    const VO: Option<&'static str> = Some("exp2");
}

/// Different implementation claiming the `TestPlugin` name
#[derive(Debug, Default, Serialize, Deserialize, schemars::JsonSchema)]
struct ReplacementMetadata {}

impl MetadataModel for ReplacementMetadata {}

impl MetadataPlugin for ReplacementMetadata {
    const NAME: Option<&'static str> = Some("TestPlugin");
}

/// Not buildable from a field mapping
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
struct CounterMetadata(u32);

impl MetadataModel for CounterMetadata {}

impl MetadataPlugin for CounterMetadata {}

fn registry_with(register: impl FnOnce(&PluginRegistry)) -> PluginRegistry {
    let registry = PluginRegistry::new();
    register(&registry);
    registry
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_new_registry_is_empty() {
    let registry = PluginRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.list_plugins(None).is_empty());
    assert!(registry.list_virtual_organizations().is_empty());
}

#[test]
fn test_register_plugin() {
    let registry = PluginRegistry::new();
    registry
        .register::<TestPluginMetadata>(false)
        .expect("first registration");

    assert_eq!(registry.list_plugins(None), ["TestPlugin"]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_register_plugin_with_vo() {
    let registry = PluginRegistry::new();
    registry.register::<TestVOPlugin>(false).expect("register");

    assert_eq!(registry.list_plugins(None), ["TestVOPlugin"]);
    assert_eq!(registry.list_plugins(Some("test_exp")), ["TestVOPlugin"]);
    assert_eq!(registry.list_virtual_organizations(), ["test_exp"]);
}

#[test]
fn test_register_duplicate_plugin_fails() {
    let registry = PluginRegistry::new();
    registry.register::<TestPluginMetadata>(false).expect("register");

    let err = registry
        .register::<TestPluginMetadata>(false)
        .expect_err("duplicate must be refused");
    assert!(matches!(err, Error::DuplicateRegistration { .. }));
    assert!(err.to_string().contains("already registered"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_register_duplicate_with_override_replaces() {
    let registry = PluginRegistry::new();
    registry.register::<TestPluginMetadata>(false).expect("register");
    registry
        .register::<ReplacementMetadata>(true)
        .expect("override is permitted");

    let class = registry
        .get_plugin("TestPlugin", None)
        .expect("still registered");
    assert!(class.is::<ReplacementMetadata>());
    assert_eq!(registry.list_plugins(None), ["TestPlugin"]);
}

#[test]
fn test_same_name_in_different_scopes() {
    let registry = PluginRegistry::new();
    registry.register::<TestPluginMetadata>(false).expect("global");

    #[derive(Debug, Default, Serialize, Deserialize, schemars::JsonSchema)]
    struct ScopedTestPlugin {}
    impl MetadataModel for ScopedTestPlugin {}
    impl MetadataPlugin for ScopedTestPlugin {
        const NAME: Option<&'static str> = Some("TestPlugin");
        const VO: Option<&'static str> = Some("test_exp");
    }

    registry
        .register::<ScopedTestPlugin>(false)
        .expect("different scope is a different key");
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.list_plugins(None), ["TestPlugin"]);
}

#[test]
fn test_register_rejects_non_struct_plugin() {
    let registry = PluginRegistry::new();
    let err = registry
        .register::<CounterMetadata>(false)
        .expect_err("tuple struct has no named fields");
    assert!(matches!(err, Error::InvalidPlugin { .. }));
    assert!(registry.is_empty());
}

// ============================================================================
// Lookup and listing
// ============================================================================

#[test]
fn test_get_plugin() {
    let registry = registry_with(|r| {
        r.register::<TestPluginMetadata>(false).expect("register");
    });
    let class = registry.get_plugin("TestPlugin", None).expect("registered");
    assert!(class.is::<TestPluginMetadata>());
    assert_eq!(class.description(), "Test plugin for unit tests");
}

#[test]
fn test_get_nonexistent_plugin() {
    let registry = PluginRegistry::new();
    assert!(registry.get_plugin("NonExistent", None).is_none());
}

#[test]
fn test_get_plugin_honours_scope() {
    let registry = registry_with(|r| {
        r.register::<TestPluginMetadata>(false).expect("register");
        r.register::<TestVOPlugin>(false).expect("register");
    });

    let scoped = registry
        .get_plugin("TestVOPlugin", Some("test_exp"))
        .expect("scoped lookup");
    assert!(scoped.is::<TestVOPlugin>());

    assert!(registry.get_plugin("TestVOPlugin", None).is_none());
    assert!(registry.get_plugin("TestVOPlugin", Some("exp2")).is_none());
    assert!(
        registry.get_plugin("TestPlugin", Some("test_exp")).is_none(),
        "a scoped lookup never falls back to the global scope"
    );
}

#[test]
fn test_list_virtual_organizations() {
    let registry = registry_with(|r| {
        r.register::<TestVOPlugin>(false).expect("register");
        r.register::<TestSecondVOPlugin>(false).expect("register");
    });
    assert_eq!(registry.list_virtual_organizations(), ["exp2", "test_exp"]);
}

#[test]
fn test_list_plugins_by_vo() {
    let registry = registry_with(|r| {
        r.register::<TestPluginMetadata>(false).expect("register");
        r.register::<TestVOPlugin>(false).expect("register");
    });

    assert_eq!(registry.list_plugins(None), ["TestPlugin", "TestVOPlugin"]);
    assert_eq!(registry.list_plugins(Some("test_exp")), ["TestVOPlugin"]);
    assert!(registry.list_plugins(Some("unknown_vo")).is_empty());
}

#[test]
fn test_get_plugin_info() {
    let registry = registry_with(|r| {
        r.register::<TestVOPlugin>(false).expect("register");
    });

    let info = registry
        .get_plugin_info("TestVOPlugin", Some("test_exp"))
        .expect("registered");
    assert_eq!(info.metadata_class, "TestVOPlugin");
    assert_eq!(info.vo.as_deref(), Some("test_exp"));
    assert_eq!(info.description, "Test VO plugin");
    assert_eq!(info.version, "1.0.0");
    assert!(info.schema["properties"].get("exp_param").is_some());

    assert!(registry.get_plugin_info("TestVOPlugin", None).is_none());
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn test_instantiate_plugin() {
    let registry = registry_with(|r| {
        r.register::<TestPluginMetadata>(false).expect("register");
    });

    let descriptor = MetadataDescriptor::new("TestPlugin").with_parameter("test_param", "custom");
    let instance = registry.instantiate_plugin(&descriptor).expect("instantiate");
    let plugin = instance
        .downcast_ref::<TestPluginMetadata>()
        .expect("instance of TestPluginMetadata");
    assert_eq!(plugin.test_param, "custom");
}

#[test]
fn test_instantiate_applies_defaults() {
    let registry = registry_with(|r| {
        r.register::<TestPluginMetadata>(false).expect("register");
    });

    let instance = registry
        .instantiate_plugin(&MetadataDescriptor::new("TestPlugin"))
        .expect("instantiate");
    let plugin = instance
        .downcast_ref::<TestPluginMetadata>()
        .expect("instance of TestPluginMetadata");
    assert_eq!(plugin.test_param, "default");
}

#[test]
fn test_instantiate_plugin_with_vo() {
    let registry = registry_with(|r| {
        r.register::<TestVOPlugin>(false).expect("register");
    });

    let descriptor = MetadataDescriptor::new("TestVOPlugin")
        .with_vo("test_exp")
        .with_parameter("exp_param", 99);
    let instance = registry.instantiate_plugin(&descriptor).expect("instantiate");
    let plugin = instance
        .downcast_ref::<TestVOPlugin>()
        .expect("instance of TestVOPlugin");
    assert_eq!(plugin.exp_param, 99);
}

#[test]
fn test_instantiate_nonexistent_plugin() {
    let registry = registry_with(|r| {
        r.register::<TestPluginMetadata>(false).expect("register");
    });

    let err = registry
        .instantiate_plugin(&MetadataDescriptor::new("NonExistent"))
        .expect_err("unknown plugin");
    assert!(matches!(err, Error::UnknownPlugin { .. }));
    let message = err.to_string();
    assert!(message.contains("Unknown metadata plugin"));
    assert!(message.contains("NonExistent"));
    assert!(message.contains("TestPlugin"), "lists available plugins: {message}");
}

#[test]
fn test_instantiate_unknown_plugin_names_scope() {
    let registry = PluginRegistry::new();
    let descriptor = MetadataDescriptor::new("TestVOPlugin").with_vo("exp2");
    let err = registry
        .instantiate_plugin(&descriptor)
        .expect_err("unknown plugin");
    assert!(err.to_string().contains("exp2"));
}

#[test]
fn test_instantiate_rejects_every_unknown_field() {
    let registry = registry_with(|r| {
        r.register::<TestPluginMetadata>(false).expect("register");
    });

    let descriptor = MetadataDescriptor::new("TestPlugin").with_parameters(
        json!({"test_param": "x", "test_parma": "y", "extra": 1})
            .as_object()
            .cloned()
            .unwrap_or_default(),
    );
    let err = registry
        .instantiate_plugin(&descriptor)
        .expect_err("typos are rejected");
    assert!(matches!(err, Error::Validation { .. }));
    let message = err.to_string();
    assert!(message.contains("extra"));
    assert!(message.contains("test_parma"));
}

#[test]
fn test_instantiate_rejects_type_mismatch() {
    let registry = registry_with(|r| {
        r.register::<TestVOPlugin>(false).expect("register");
    });

    let descriptor = MetadataDescriptor::new("TestVOPlugin")
        .with_vo("test_exp")
        .with_parameter("exp_param", "not a number");
    let err = registry
        .instantiate_plugin(&descriptor)
        .expect_err("wrong type");
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_validate_descriptor() {
    let registry = registry_with(|r| {
        r.register::<TestVOPlugin>(false).expect("register");
    });

    let valid = MetadataDescriptor::new("TestVOPlugin").with_vo("test_exp");
    assert!(registry.validate_descriptor(&valid).is_empty());

    let invalid = MetadataDescriptor::new("TestVOPlugin")
        .with_vo("test_exp")
        .with_parameter("exp_parm", 1)
        .with_parameter("exp_param", "x");
    let problems = registry.validate_descriptor(&invalid);
    assert_eq!(problems.len(), 2, "problems: {problems:?}");
    assert!(problems[0].contains("exp_parm"));

    let unknown = MetadataDescriptor::new("Missing");
    assert_eq!(registry.validate_descriptor(&unknown).len(), 1);
}
