//! Export of an [`AnnotatedGraph`] for downstream renderers.
//!
//! JSON is the serde form of the graph. DOT is a Graphviz undirected graph with
//! one line per edge instance; block edges carry a `block` attribute with the
//! block index and a `label` with the block type.

use std::fmt::Write as _;
use std::path::Path;

use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::AnnotatedGraph;

/// Serializes the graph to pretty JSON.
pub fn to_json(graph: &AnnotatedGraph) -> Result<String> {
  Ok(serde_json::to_string_pretty(graph)?)
}

/// Renders the graph as a Graphviz DOT document.
pub fn to_dot(graph: &AnnotatedGraph) -> String {
  let mut out = String::from("graph blocks {\n");
  for v in &graph.vertices {
    let _ = writeln!(out, "  {};", v);
  }
  for (id, e) in graph.edges.iter().enumerate() {
    let mut attrs = Vec::new();
    if let Some(w) = e.weight {
      attrs.push(format!("weight={}", w));
    }
    if let Some(block) = graph.block_of(id) {
      attrs.push(format!("block={}", block));
      if let Some(ty) = graph.block_types.get(block) {
        attrs.push(format!("label=\"{}\"", ty));
      }
    }
    if attrs.is_empty() {
      let _ = writeln!(out, "  {} -- {};", e.source, e.target);
    } else {
      let _ = writeln!(out, "  {} -- {} [{}];", e.source, e.target, attrs.join(", "));
    }
  }
  out.push_str("}\n");
  out
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
  }
  std::fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Writes the graph as JSON to `path`, creating parent directories.
#[instrument(level = "trace", skip(path, graph))]
pub fn save_json(path: &Path, graph: &AnnotatedGraph) -> Result<()> {
  write_file(path, &to_json(graph)?)
}

/// Writes the graph as DOT to `path`, creating parent directories.
#[instrument(level = "trace", skip(path, graph))]
pub fn save_dot(path: &Path, graph: &AnnotatedGraph) -> Result<()> {
  write_file(path, &to_dot(graph))
}

/// Loads a graph previously written by [`save_json`].
#[instrument(level = "trace", skip(path))]
pub fn load_json(path: &Path) -> Result<AnnotatedGraph> {
  let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
  Ok(serde_json::from_slice(&bytes)?)
}
