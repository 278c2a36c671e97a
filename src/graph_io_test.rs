//! Tests for `graph_io`.

use crate::assembler::assemble;
use crate::graph_io::{load_json, save_dot, save_json, to_dot, to_json};
use crate::matrix_parser::parse_matrix;
use crate::trace_parser::parse_str;
use crate::types::AnnotatedGraph;

fn sample_graph() -> AnnotatedGraph {
  let m = parse_matrix("0 1\n1 0").unwrap();
  let parsed = parse_str(
    "New Block\n(0,1)\nthis block represents a regular-region\nSummary information",
  );
  assemble(&m, &parsed)
}

#[test]
fn dot_lists_vertices_and_edge_instances() {
  let dot = to_dot(&sample_graph());
  assert!(dot.starts_with("graph blocks {\n"));
  assert!(dot.contains("  0;\n"));
  assert!(dot.contains("  1;\n"));
  assert!(dot.contains("  0 -- 1 [weight=1];\n"));
  assert!(dot.contains("  0 -- 1 [block=0, label=\"Regular\"];\n"));
  assert!(dot.ends_with("}\n"));
}

#[test]
fn json_contains_provenance_and_types() {
  let json = to_json(&sample_graph()).unwrap();
  let v: serde_json::Value = serde_json::from_str(&json).unwrap();
  assert_eq!(v["edges"].as_array().unwrap().len(), 2);
  assert_eq!(v["provenance"]["1"], 0);
  assert_eq!(v["block_types"], serde_json::json!(["regular"]));
  assert_eq!(v["edges"][1]["weight"], serde_json::Value::Null);
}

#[test]
fn save_and_load_json() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("out").join("graph.json");
  let g = sample_graph();
  save_json(&path, &g).unwrap();
  let loaded = load_json(&path).unwrap();
  assert_eq!(loaded, g);
}

#[test]
fn save_dot_writes_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("graph.dot");
  save_dot(&path, &sample_graph()).unwrap();
  let text = std::fs::read_to_string(&path).unwrap();
  assert!(text.contains("block=0"));
}

#[test]
fn load_json_missing_file_errors() {
  let dir = tempfile::tempdir().unwrap();
  assert!(load_json(&dir.path().join("missing.json")).is_err());
}
