//! CLI integration tests.
//!
//! These tests invoke the `sparql2graph` binary via `std::process::Command`
//! against the fixture JSON files and verify output correctness.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

/// Path to a fixture JSON file.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sparql2graph"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute binary")
}

fn run_ok(args: &[&str]) -> (Value, String) {
    let output = run(args);
    assert!(
        output.status.success(),
        "sparql2graph failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    (stdout, String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn json_output_is_graph_model() {
    let fixture = fixture_path("person_select.json");
    let (doc, stderr) = run_ok(&[fixture.to_str().unwrap()]);

    assert_eq!(doc["queryType"], "SELECT");
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(doc["edges"].as_array().unwrap().len(), 3);
    assert_eq!(doc["whereTripleCount"], 3);
    assert!(
        stderr.contains("Built 4 nodes and 3 edges from 3 WHERE triples (SELECT)"),
        "missing summary: {stderr}"
    );
}

#[test]
fn cytoscape_format_writes_elements() {
    let fixture = fixture_path("union_graph.json");
    let (doc, _) = run_ok(&[fixture.to_str().unwrap(), "--format", "cytoscape", "-q"]);

    let elements = doc.as_array().expect("elements array");
    assert_eq!(elements.len(), 6 + 4);
    assert!(elements.iter().all(|el| el["data"]["id"].is_string()));

    let (short, _) = run_ok(&[fixture.to_str().unwrap(), "-f", "cy", "-q"]);
    assert_eq!(short, doc);
}

#[test]
fn compact_output_is_single_line() {
    let fixture = fixture_path("person_select.json");
    let output = run(&[fixture.to_str().unwrap(), "--compact", "-q"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn output_file_flag() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("graph.json");
    let fixture = fixture_path("person_select.json");

    let output = run(&[
        fixture.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-q",
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["queryType"], "SELECT");
}

#[test]
fn quiet_suppresses_stderr() {
    let fixture = fixture_path("person_select.json");
    let output = run(&[fixture.to_str().unwrap(), "-q"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn verbose_reports_progress() {
    let fixture = fixture_path("person_select.json");
    let (_, stderr) = run_ok(&[fixture.to_str().unwrap(), "-v"]);
    assert!(stderr.contains("Loading input from:"), "stderr: {stderr}");
    assert!(stderr.contains("Annotation predicates: 7"), "stderr: {stderr}");
    assert!(stderr.contains("Built"), "stderr: {stderr}");
}

#[test]
fn show_prefixes_prints_sorted_legend() {
    let fixture = fixture_path("person_select.json");
    let (_, stderr) = run_ok(&[fixture.to_str().unwrap(), "--show-prefixes"]);
    let foaf = stderr
        .find("foaf: <http://xmlns.com/foaf/0.1/>")
        .expect("foaf legend line");
    let rdf = stderr.find("rdf: <").expect("rdf legend line");
    let skos = stderr.find("skos: <").expect("skos legend line");
    assert!(foaf < rdf && rdf < skos, "legend not sorted: {stderr}");
}

#[test]
fn show_prefixes_without_declarations() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{"queryType": "ASK", "where": []}"#).unwrap();
    let (doc, stderr) = run_ok(&[file.path().to_str().unwrap(), "--show-prefixes"]);
    assert_eq!(doc["queryType"], "ASK");
    assert!(stderr.contains("No PREFIX declarations found."), "stderr: {stderr}");
}

#[test]
fn unknown_format_fails() {
    let fixture = fixture_path("person_select.json");
    let output = run(&[fixture.to_str().unwrap(), "--format", "dot"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown format: dot"), "stderr: {stderr}");
}

#[test]
fn missing_input_fails() {
    let output = run(&["/nonexistent/query.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: IO error"));
}

#[test]
fn no_default_annotations_changes_label_category() {
    let fixture = fixture_path("union_graph.json");
    let (doc, _) = run_ok(&[fixture.to_str().unwrap(), "-q"]);
    assert_eq!(doc["edges"][1]["category"], "annotationProp");

    let (doc, _) = run_ok(&[fixture.to_str().unwrap(), "--no-default-annotations", "-q"]);
    assert_eq!(doc["edges"][1]["category"], "datatypeProp");
}

#[test]
fn extra_annotation_predicate() {
    let fixture = fixture_path("union_graph.json");
    let (doc, _) = run_ok(&[
        fixture.to_str().unwrap(),
        "--no-default-annotations",
        "--annotation-predicate",
        "http://www.w3.org/2000/01/rdf-schema#label",
        "-q",
    ]);
    assert_eq!(doc["edges"][1]["category"], "annotationProp");
}
