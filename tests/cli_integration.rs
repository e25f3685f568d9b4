//! Integration tests for the dnn-preproc binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"%YAML:1.0
---
opencv_fd:
  model: "opencv_face_detector.caffemodel"
  config: "opencv_face_detector.prototxt"
  mean: [104, 177, 123]
  scale: 1.0
  width: 300
  height: 300
  rgb: false
  sample: "object_detection"

yolo:
  model: "yolov3.weights"
  config: "yolov3.cfg"
  mean: [0, 0, 0]
  scale: 0.00392
  width: 416
  height: 416
  rgb: true
  sample: "object_detection"

squeezenet:
  model: "squeezenet_v1.1.caffemodel"
  mean: [0, 0, 0]
  scale: 1.0
  width: 227
  height: 227
  rgb: false
  sample: "classification"

broken_mean:
  model: "yolov3.weights"
  mean: [0, zero, 0]
  sample: "object_detection"

broken_field:
  model: "yolov3.weights"
  scale:
    value: 1.0
  sample: "object_detection"

broken_flag:
  model: "yolov3.weights"
  rgb: "maybe"
  sample: "object_detection"
"#;

/// Workspace with the catalog and the files it references.
fn workspace() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("models.yml"), CATALOG).expect("write catalog");
    for name in [
        "opencv_face_detector.caffemodel",
        "opencv_face_detector.prototxt",
        "yolov3.weights",
        "yolov3.cfg",
    ] {
        fs::write(dir.path().join(name), b"x").expect("write model file");
    }
    dir
}

fn command(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("dnn-preproc");
    cmd.current_dir(dir)
        .env("DNN_PREPROC_ZOO", dir.join("models.yml"))
        .env_remove("DNN_PREPROC_SAMPLE")
        .env_remove("OPENCV_SAMPLES_DATA_PATH")
        .env_remove("OPENCV_DNN_TEST_DATA_PATH")
        .env_remove("OPENCV_TEST_DATA_PATH")
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).expect("utf-8 stdout");
    serde_json::from_str(&stdout).expect("valid JSON output")
}

#[test]
fn test_alias_supplies_defaults() {
    let dir = workspace();
    let json = json_output(command(dir.path()).args(["yolo", "--json"]));

    assert_eq!(json["alias"], "yolo");
    assert_eq!(json["model"], "yolov3.weights");
    assert_eq!(json["config"], "yolov3.cfg");
    assert_eq!(json["scale"], 0.00392);
    assert_eq!(json["width"], 416);
    assert_eq!(json["rgb"], true);
    assert_eq!(json["mean"], serde_json::json!([0.0, 0.0, 0.0]));
}

#[test]
fn test_command_line_overrides_alias() {
    let dir = workspace();
    let json = json_output(command(dir.path()).args([
        "opencv_fd",
        "--width",
        "640",
        "--mean",
        "1",
        "2",
        "3",
        "--json",
    ]));

    assert_eq!(json["width"], 640);
    assert_eq!(json["height"], 300);
    assert_eq!(json["mean"], serde_json::json!([1.0, 2.0, 3.0]));
    assert_eq!(json["rgb"], false);
}

#[test]
fn test_text_output() {
    let dir = workspace();
    command(dir.path())
        .arg("opencv_fd")
        .assert()
        .success()
        .stdout(predicate::str::contains("alias: opencv_fd"))
        .stdout(predicate::str::contains("mean: 104 177 123"))
        .stdout(predicate::str::contains("classes: -"));
}

#[test]
fn test_no_arguments_lists_aliases() {
    let dir = workspace();
    command(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  yolo"))
        .stdout(predicate::str::contains("  squeezenet").not());
}

#[test]
fn test_no_arguments_without_catalog() {
    let dir = TempDir::new().expect("create temp dir");
    command(dir.path())
        .env("DNN_PREPROC_ZOO", dir.path().join("absent.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No model catalog found."));
}

#[test]
fn test_sample_tag_selects_aliases() {
    let dir = workspace();
    command(dir.path())
        .args(["squeezenet", "--model", "yolov3.weights"])
        .assert()
        .failure()
        .code(2);

    fs::write(dir.path().join("squeezenet_v1.1.caffemodel"), b"x").expect("write model");
    command(dir.path())
        .args(["squeezenet", "--sample", "classification"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width: 227"));
}

#[test]
fn test_model_required_without_alias() {
    let dir = TempDir::new().expect("create temp dir");
    command(dir.path())
        .args(["--width", "10"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--model"));
}

#[test]
fn test_missing_file_exits_zero_with_message() {
    let dir = TempDir::new().expect("create temp dir");
    command(dir.path())
        .args(["--model", "missing.bin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "File missing.bin not found! Please specify a valid path.",
        ));
}

#[test]
fn test_file_found_in_data_root() {
    let dir = TempDir::new().expect("create temp dir");
    let data = TempDir::new().expect("create data dir");
    fs::create_dir_all(data.path().join("dnn")).expect("create dnn dir");
    fs::write(data.path().join("dnn").join("net.onnx"), b"x").expect("write model");

    let json = json_output(
        command(dir.path())
            .env("OPENCV_TEST_DATA_PATH", data.path())
            .args(["--model", "net.onnx", "--json"]),
    );
    let model = json["model"].as_str().expect("model is a string");
    assert!(model.ends_with("net.onnx"));
    assert!(model.contains("dnn"));
}

#[test]
fn test_file_found_in_search_path() {
    let dir = TempDir::new().expect("create temp dir");
    let models = TempDir::new().expect("create models dir");
    fs::write(models.path().join("net.onnx"), b"x").expect("write model");

    let json = json_output(command(dir.path()).args([
        "--model",
        "net.onnx",
        "--search-path",
        models.path().to_str().expect("utf-8 path"),
        "--scale",
        "-1",
        "--json",
    ]));
    let expected = models.path().join("net.onnx");
    assert_eq!(json["model"].as_str(), expected.to_str());
    assert_eq!(json["scale"], -1.0);

    command(dir.path())
        .args(["--model", "net.onnx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File net.onnx not found!"));
}

#[test]
fn test_unexpected_value_format_exits_zero() {
    let dir = workspace();
    command(dir.path())
        .arg("broken_mean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unexpected value format"));
}

#[test]
fn test_unexpected_field_format_exits_zero() {
    let dir = workspace();
    command(dir.path())
        .arg("broken_field")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unexpected field format"));
}

#[test]
fn test_invalid_flag_default_fails() {
    let dir = workspace();
    command(dir.path())
        .arg("broken_flag")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid default for flag '--rgb'"));
}

#[test]
fn test_invalid_catalog_fails() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("models.yml"), "a: [1, 2").expect("write catalog");
    command(dir.path())
        .args(["a", "--model", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse model catalog"));
}
