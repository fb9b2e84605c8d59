//! Unit tests for the metadata descriptor

use mmr_domain::{Error, MetadataDescriptor};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

#[test]
fn test_deserialize_flattens_parameters() {
    let descriptor: MetadataDescriptor = serde_json::from_value(json!({
        "metadata_class": "TestPlugin",
        "test_param": "custom",
    }))
    .expect("valid descriptor");

    assert_eq!(descriptor.metadata_class(), "TestPlugin");
    assert!(descriptor.vo().is_none());
    assert_eq!(descriptor.parameters().len(), 1);
    assert_eq!(descriptor.parameters()["test_param"], "custom");
}

#[test]
fn test_deserialize_reserved_keys_are_not_parameters() {
    let descriptor: MetadataDescriptor = serde_json::from_value(json!({
        "metadata_class": "TestVOPlugin",
        "vo": "test_exp",
        "version": "2.0.0",
        "exp_param": 99,
    }))
    .expect("valid descriptor");

    assert_eq!(descriptor.vo(), Some("test_exp"));
    assert_eq!(descriptor.version(), Some("2.0.0"));
    assert!(!descriptor.parameters().contains_key("vo"));
    assert!(!descriptor.parameters().contains_key("version"));
    assert_eq!(descriptor.parameters()["exp_param"], 99);
}

#[test]
fn test_missing_metadata_class_is_rejected() {
    let result = serde_json::from_value::<MetadataDescriptor>(json!({"vo": "lhcb"}));
    assert!(result.is_err());
}

#[test]
fn test_builder_skips_reserved_parameter_keys() {
    let descriptor = MetadataDescriptor::new("Admin")
        .with_parameter("admin_level", 3)
        .with_parameter("vo", "ignored");

    assert_eq!(descriptor.parameters().len(), 1);
    assert!(descriptor.vo().is_none());
}

#[test]
fn test_serialize_round_trips_shape() {
    let descriptor = MetadataDescriptor::new("QueryBased")
        .with_vo("ctao")
        .with_parameter("site", "LaPalma");

    let json = serde_json::to_value(&descriptor).expect("serialize");
    assert_eq!(
        json,
        json!({"metadata_class": "QueryBased", "vo": "ctao", "site": "LaPalma"})
    );
}

#[test]
fn test_merged_merges_nested_objects() {
    let descriptor = MetadataDescriptor::new("QueryBased")
        .with_parameter("query_params", json!({"site": "CERN", "campaign": "Run3"}));

    let merged = descriptor
        .merged(object(json!({"query_params": {"site": "LaPalma"}, "data_type": "raw"})))
        .expect("merge");

    assert_eq!(
        merged.parameters()["query_params"],
        json!({"site": "LaPalma", "campaign": "Run3"})
    );
    assert_eq!(merged.parameters()["data_type"], "raw");
    // The source descriptor is left untouched
    assert_eq!(descriptor.parameters()["query_params"]["site"], "CERN");
}

#[test]
fn test_merged_updates_identity() {
    let descriptor = MetadataDescriptor::new("User").with_vo("lhcb");
    let merged = descriptor
        .merged(object(json!({"metadata_class": "Admin", "vo": null})))
        .expect("merge");

    assert_eq!(merged.metadata_class(), "Admin");
    assert!(merged.vo().is_none());
}

#[test]
fn test_merged_rejects_non_string_identity() {
    let descriptor = MetadataDescriptor::new("User");
    let result = descriptor.merged(object(json!({"vo": 12})));
    assert!(matches!(result, Err(Error::Validation { .. })));
}
