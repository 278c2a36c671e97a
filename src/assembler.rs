//! Builds the annotated multigraph from an adjacency matrix and parsed blocks.

use tracing::{debug, info, instrument, warn};

use crate::types::{AdjacencyMatrix, AnnotatedGraph, ParseResult};

/// Matrix weight above which assembly logs a warning.
pub const LARGE_WEIGHT_WARNING: u32 = 10_000;

/// True if expanding `matrix` into parallel edges should be reported as unusually large.
pub fn has_large_weight(matrix: &AdjacencyMatrix) -> bool {
  matrix.max_weight() > LARGE_WEIGHT_WARNING
}

/// Assembles the multigraph.
///
/// Every vertex pair of weight `w > 0` in the matrix becomes `w` parallel edges,
/// each carrying `w`. Diagonal cells are never turned into edges. Then every
/// block edge is added as a further instance, recorded in `provenance` with the
/// block's index. Block edges are not checked against the matrix.
#[instrument(level = "trace", skip(matrix, parsed))]
pub fn assemble(matrix: &AdjacencyMatrix, parsed: &ParseResult) -> AnnotatedGraph {
  let mut graph = AnnotatedGraph::new();
  graph.vertices.extend(0..matrix.dimension());

  if !matrix.is_symmetric() {
    warn!("adjacency matrix is not symmetric; each vertex pair uses the larger of its two weights");
  }
  if has_large_weight(matrix) {
    warn!(
      max_weight = matrix.max_weight(),
      threshold = LARGE_WEIGHT_WARNING,
      "adjacency matrix weight expands into a very large number of parallel edges"
    );
  }

  for (i, j, weight) in matrix.weighted_pairs() {
    for _ in 0..weight {
      graph.add_edge(i, j, Some(weight));
    }
  }
  let matrix_edges = graph.edge_count();
  debug!(matrix_edges, "matrix edges added");

  for (index, block) in parsed.blocks.iter().enumerate() {
    for edge in &block.edges {
      if edge.is_self_loop() {
        debug!(block = index, vertex = edge.v1, "block asserts a self-loop");
      }
      let id = graph.add_edge(edge.v1, edge.v2, None);
      graph.provenance.insert(id, index);
    }
  }
  graph.block_types = parsed.block_types();

  info!(
    vertices = graph.vertex_count(),
    matrix_edges,
    block_edges = graph.provenance.len(),
    blocks = graph.block_types.len(),
    "graph assembled"
  );
  graph
}
