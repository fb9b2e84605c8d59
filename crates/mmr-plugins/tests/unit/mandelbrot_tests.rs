//! Tests for the Mandelbrot models

use std::path::PathBuf;

use mmr_domain::{InputQuery, MetadataModel, MetadataPlugin, QueryParams};
use mmr_plugins::{MandelBrotGenerationMetadata, MandelBrotMergingMetadata};
use serde_json::{Value, json};

fn geometry() -> Value {
    json!({
        "precision": 0.1,
        "max_iterations": 1000,
        "start_x": -2.0,
        "start_y": -1.5,
        "step": 1,
        "split": 4,
        "width": 640,
        "height": 480,
        "output_name": "mandelbrot"
    })
}

#[test]
fn test_names() {
    assert_eq!(
        MandelBrotGenerationMetadata::metadata_class(),
        "MandelBrotGeneration"
    );
    assert_eq!(MandelBrotMergingMetadata::metadata_class(), "MandelBrotMerging");
}

#[test]
fn test_generation_requires_geometry() {
    assert!(serde_json::from_value::<MandelBrotGenerationMetadata>(json!({"width": 640})).is_err());
}

#[test]
fn test_generation_output_query() {
    let model: MandelBrotGenerationMetadata =
        serde_json::from_value(geometry()).expect("valid parameters");
    assert_eq!(
        model.get_output_query("data", &QueryParams::new()),
        Some(PathBuf::from("filecatalog/mandelbrot/images/raw/640x480"))
    );
    assert!(model.get_output_query("image", &QueryParams::new()).is_none());
}

#[test]
fn test_merging_queries() {
    let mut parameters = geometry();
    parameters["data"] = json!(["tile-1.txt", "tile-2.txt"]);
    let model: MandelBrotMergingMetadata =
        serde_json::from_value(parameters).expect("valid parameters");

    assert_eq!(
        model.get_input_query("data", &QueryParams::new()),
        Some(InputQuery::Single(PathBuf::from(
            "filecatalog/mandelbrot/images/raw/640x480"
        )))
    );
    assert_eq!(
        model.get_output_query("data-merged", &QueryParams::new()),
        Some(PathBuf::from("filecatalog/mandelbrot/images/merged/1280x960"))
    );
}

#[test]
fn test_merging_output_requires_tiles() {
    let model: MandelBrotMergingMetadata =
        serde_json::from_value(geometry()).expect("data is optional");
    assert!(model.get_output_query("data-merged", &QueryParams::new()).is_none());
}

#[test]
fn test_merging_output_rejects_overflowing_geometry() {
    let mut parameters = geometry();
    parameters["width"] = json!(u64::MAX);
    parameters["data"] = json!(["tile-1.txt", "tile-2.txt"]);
    let model: MandelBrotMergingMetadata =
        serde_json::from_value(parameters).expect("valid parameters");

    assert!(model.get_output_query("data-merged", &QueryParams::new()).is_none());
    assert!(model.get_input_query("data", &QueryParams::new()).is_some());
}
